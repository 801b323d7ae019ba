use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activation::activation::Activation;
use crate::error::NetworkError;
use crate::network::neuron::Layer;

/// Number of neurons in the input layer.
pub const INPUT_NEURONS: usize = 2;
/// Number of neurons in the hidden layer.
pub const HIDDEN_NEURONS: usize = 2;
/// Number of neurons in the output layer.
pub const OUTPUT_NEURONS: usize = 1;

/// A three-layer feed-forward network with fixed layer sizes.
///
/// The network owns its layers for its whole lifetime; nothing is shared.
/// Forward propagation caches each neuron's activation in place, which the
/// training step reads back when applying weight updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeuralNetwork {
    pub input_layer: Layer,
    pub hidden_layer: Layer,
    pub output_layer: Layer,
    pub activation: Activation,
}

impl NeuralNetwork {
    /// Builds a randomly initialized network using [`Activation::Reciprocal`].
    ///
    /// Every weight and every activation slot is an independent uniform
    /// `[0, 1)` draw from `rng`, consumed in layer order (input, hidden,
    /// output) and per neuron (weights, then slot).
    pub fn new<R: Rng>(rng: &mut R) -> NeuralNetwork {
        NeuralNetwork::with_activation(rng, Activation::Reciprocal)
    }

    /// Same as [`NeuralNetwork::new`] with an explicit activation choice.
    pub fn with_activation<R: Rng>(rng: &mut R, activation: Activation) -> NeuralNetwork {
        NeuralNetwork {
            input_layer: Layer::new(INPUT_NEURONS, HIDDEN_NEURONS, rng),
            hidden_layer: Layer::new(HIDDEN_NEURONS, OUTPUT_NEURONS, rng),
            output_layer: Layer::new(OUTPUT_NEURONS, 0, rng),
            activation,
        }
    }

    /// Forward pass.  Returns the output layer's activations in order.
    ///
    /// Input values are copied verbatim into the input layer's activation
    /// slots (no activation function on inputs); each subsequent layer
    /// computes a plain weighted sum of the previous layer's activations
    /// (no bias term) and applies the activation function.  A pure function
    /// of the current weights and `inputs`: calling it twice in a row
    /// returns identical results.
    pub fn feed_forward(&mut self, inputs: &[f64]) -> Result<Vec<f64>, NetworkError> {
        if inputs.len() != INPUT_NEURONS {
            return Err(NetworkError::InvalidInputLength {
                expected: INPUT_NEURONS,
                actual: inputs.len(),
            });
        }

        for (neuron, &value) in self.input_layer.neurons.iter_mut().zip(inputs) {
            neuron.activation = value;
        }

        for i in 0..HIDDEN_NEURONS {
            let sum: f64 = self
                .input_layer
                .neurons
                .iter()
                .map(|n| n.activation * n.weights[i])
                .sum();
            self.hidden_layer.neurons[i].activation = self.activation.function(sum);
        }

        for i in 0..OUTPUT_NEURONS {
            let sum: f64 = self
                .hidden_layer
                .neurons
                .iter()
                .map(|n| n.activation * n.weights[i])
                .sum();
            self.output_layer.neurons[i].activation = self.activation.function(sum);
        }

        Ok(self.output_layer.activations())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::neuron::Neuron;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// The canonical forward-pass fixture: known weights, inputs (1.0, 1.0).
    fn fixture_network() -> NeuralNetwork {
        NeuralNetwork {
            input_layer: Layer {
                neurons: vec![
                    Neuron { weights: vec![0.1, 0.2], activation: 0.0 },
                    Neuron { weights: vec![0.3, 0.4], activation: 0.0 },
                ],
            },
            hidden_layer: Layer {
                neurons: vec![
                    Neuron { weights: vec![0.5], activation: 0.0 },
                    Neuron { weights: vec![0.6], activation: 0.0 },
                ],
            },
            output_layer: Layer {
                neurons: vec![Neuron { weights: vec![], activation: 0.7 }],
            },
            activation: Activation::Reciprocal,
        }
    }

    #[test]
    fn test_shape_invariants() {
        let mut rng = StdRng::seed_from_u64(42);
        let net = NeuralNetwork::new(&mut rng);

        assert_eq!(net.input_layer.len(), INPUT_NEURONS);
        assert_eq!(net.hidden_layer.len(), HIDDEN_NEURONS);
        assert_eq!(net.output_layer.len(), OUTPUT_NEURONS);

        for neuron in &net.input_layer.neurons {
            assert_eq!(neuron.weights.len(), HIDDEN_NEURONS);
        }
        for neuron in &net.hidden_layer.neurons {
            assert_eq!(neuron.weights.len(), OUTPUT_NEURONS);
        }
        for neuron in &net.output_layer.neurons {
            assert!(neuron.weights.is_empty());
        }
    }

    #[test]
    fn test_initial_values_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(42);
        let net = NeuralNetwork::new(&mut rng);
        for layer in [&net.input_layer, &net.hidden_layer, &net.output_layer] {
            for neuron in &layer.neurons {
                assert!((0.0..1.0).contains(&neuron.activation));
                assert!(neuron.weights.iter().all(|w| (0.0..1.0).contains(w)));
            }
        }
    }

    #[test]
    fn test_forward_fixture() {
        let mut net = fixture_network();
        let outputs = net.feed_forward(&[1.0, 1.0]).unwrap();

        // Hidden pre-activations: 1*0.1 + 1*0.3 = 0.4 and 1*0.2 + 1*0.4 = 0.6.
        let h0 = 1.0 / (1.0 - (1.0 * 0.1 + 1.0 * 0.3));
        let h1 = 1.0 / (1.0 - (1.0 * 0.2 + 1.0 * 0.4));
        assert!((net.hidden_layer.neurons[0].activation - h0).abs() < 1e-12);
        assert!((net.hidden_layer.neurons[1].activation - h1).abs() < 1e-12);

        let expected = 1.0 / (1.0 - (h0 * 0.5 + h1 * 0.6));
        assert_eq!(outputs.len(), 1);
        assert!((outputs[0] - expected).abs() < 1e-12);
        assert!((outputs[0] - (-0.75)).abs() < 1e-9);
    }

    #[test]
    fn test_inputs_copied_verbatim() {
        let mut net = fixture_network();
        net.feed_forward(&[0.25, -3.0]).unwrap();
        assert_eq!(net.input_layer.neurons[0].activation, 0.25);
        assert_eq!(net.input_layer.neurons[1].activation, -3.0);
    }

    #[test]
    fn test_forward_is_idempotent() {
        let mut net = fixture_network();
        let first = net.feed_forward(&[0.5, 0.5]).unwrap();
        let second = net.feed_forward(&[0.5, 0.5]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_forward_is_deterministic_across_clones() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut net = NeuralNetwork::new(&mut rng);
        let mut clone = net.clone();
        assert_eq!(
            net.feed_forward(&[0.3, 0.8]).unwrap(),
            clone.feed_forward(&[0.3, 0.8]).unwrap()
        );
    }

    #[test]
    fn test_invalid_input_length() {
        let mut net = fixture_network();
        let err = net.feed_forward(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            NetworkError::InvalidInputLength { expected: 2, actual: 3 }
        );
        let err = net.feed_forward(&[]).unwrap_err();
        assert_eq!(
            err,
            NetworkError::InvalidInputLength { expected: 2, actual: 0 }
        );
    }

    #[test]
    fn test_singularity_propagates_as_inf() {
        // Hidden pre-activation hits exactly 1.0; the reciprocal activation
        // divides by zero and the forward pass carries the Inf through.
        let mut net = fixture_network();
        net.input_layer.neurons[0].weights = vec![1.0, 1.0];
        net.input_layer.neurons[1].weights = vec![0.0, 0.0];
        let outputs = net.feed_forward(&[1.0, 0.0]).unwrap();
        assert!(net.hidden_layer.neurons[0].activation.is_infinite());
        // 1 / (1 - Inf) collapses to -0.0 at the output.
        assert_eq!(outputs[0], 0.0);
    }
}
