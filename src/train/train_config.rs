/// Number of online training iterations the driver performs.
pub const ITERATIONS: usize = 10_000;
/// Step-size multiplier applied to every weight update.
pub const LEARNING_RATE: f64 = 0.1;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `iterations`    — number of single-sample training steps; the loop
///                     always runs exactly this many, with no convergence
///                     check or early stopping
/// - `learning_rate` — scalar multiplier for each weight update
pub struct TrainConfig {
    pub iterations: usize,
    pub learning_rate: f64,
}

impl TrainConfig {
    pub fn new(iterations: usize, learning_rate: f64) -> Self {
        TrainConfig {
            iterations,
            learning_rate,
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(ITERATIONS, LEARNING_RATE)
    }
}
