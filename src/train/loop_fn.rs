use rand::Rng;

use crate::error::NetworkError;
use crate::network::network::{NeuralNetwork, INPUT_NEURONS, OUTPUT_NEURONS};
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_step;

/// Draws one training sample: two independent uniform `[0, 1)` inputs and
/// their product as the single target.
pub fn sample_product<R: Rng>(rng: &mut R) -> (Vec<f64>, Vec<f64>) {
    let inputs: Vec<f64> = (0..INPUT_NEURONS).map(|_| rng.gen::<f64>()).collect();
    let targets = vec![inputs[0] * inputs[1]; OUTPUT_NEURONS];
    (inputs, targets)
}

/// Trains `network` for exactly `config.iterations` single-sample steps.
///
/// Each iteration draws a fresh sample from `rng` and applies one
/// [`train_step`].  Strictly sequential; no convergence check, no early
/// stopping, no loss reporting.  The sample shapes are correct by
/// construction, so the `Result` is `Ok` in practice; it is kept so shape
/// errors surface instead of panicking if the fixed sizes ever change.
pub fn train_loop<R: Rng>(
    network: &mut NeuralNetwork,
    rng: &mut R,
    config: &TrainConfig,
) -> Result<(), NetworkError> {
    for _ in 0..config.iterations {
        let (inputs, targets) = sample_product(rng);
        train_step(network, &inputs, &targets, config.learning_rate)?;
    }
    Ok(())
}
