use crate::error::NetworkError;
use crate::network::network::{NeuralNetwork, HIDDEN_NEURONS, OUTPUT_NEURONS};

/// One online backpropagation step: forward pass, then in-place weight
/// updates toward `targets`.
///
/// The update rule is deliberately derivative-free: the output delta is the
/// raw signed error `target - output`, the hidden delta is that error
/// propagated back through the output weights, and neither is scaled by the
/// activation's derivative.  Both deltas are captured before any weight
/// changes, so every update in this step sees the state left by the single
/// preceding forward pass.  Activation slots are never adjusted by training.
pub fn train_step(
    network: &mut NeuralNetwork,
    inputs: &[f64],
    targets: &[f64],
    learning_rate: f64,
) -> Result<(), NetworkError> {
    if targets.len() != OUTPUT_NEURONS {
        return Err(NetworkError::InvalidTargetLength {
            expected: OUTPUT_NEURONS,
            actual: targets.len(),
        });
    }

    let outputs = network.feed_forward(inputs)?;

    let output_errors: Vec<f64> = targets
        .iter()
        .zip(outputs.iter())
        .map(|(target, output)| target - output)
        .collect();

    // Must be computed from the pre-update output weights.
    let hidden_errors: Vec<f64> = network
        .hidden_layer
        .neurons
        .iter()
        .map(|neuron| {
            output_errors
                .iter()
                .zip(neuron.weights.iter())
                .map(|(error, weight)| error * weight)
                .sum()
        })
        .collect();

    for i in 0..OUTPUT_NEURONS {
        for neuron in network.hidden_layer.neurons.iter_mut() {
            neuron.weights[i] += learning_rate * output_errors[i] * neuron.activation;
        }
    }

    for i in 0..HIDDEN_NEURONS {
        for neuron in network.input_layer.neurons.iter_mut() {
            neuron.weights[i] += learning_rate * hidden_errors[i] * neuron.activation;
        }
    }

    Ok(())
}
