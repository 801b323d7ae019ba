use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;

use prodnet::{train_loop, NetworkError, NeuralNetwork, TrainConfig};

fn main() -> Result<(), NetworkError> {
    // One generator, seeded once from the wall clock, drives both
    // initialization and sample drawing.
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut network = NeuralNetwork::new(&mut rng);
    train_loop(&mut network, &mut rng, &TrainConfig::default())?;

    // The target function is in0 * in1, so (0.5, 0.5) should land near 0.25.
    let outputs = network.feed_forward(&[0.5, 0.5])?;
    println!("{:?}", outputs);

    Ok(())
}
