use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single neuron: its outgoing edge weights and its activation slot.
///
/// `weights[i]` is the edge to neuron `i` of the *next* layer, so output-layer
/// neurons carry an empty weight vector.  There is no additive bias term in
/// the weighted sum anywhere in this network; `activation` is the cached
/// result of the most recent forward pass (for input neurons, the raw input
/// value).  It is seeded with a uniform draw at construction, one value per
/// slot, but any such value is overwritten by the first forward pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neuron {
    pub weights: Vec<f64>,
    pub activation: f64,
}

impl Neuron {
    /// Creates a neuron with `fan_out` outgoing weights, each an independent
    /// uniform draw from `[0, 1)`, and a uniformly drawn activation slot.
    pub fn new<R: Rng>(fan_out: usize, rng: &mut R) -> Neuron {
        let weights = (0..fan_out).map(|_| rng.gen::<f64>()).collect();
        Neuron {
            weights,
            activation: rng.gen::<f64>(),
        }
    }
}

/// An ordered group of neurons of fixed size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates `size` neurons, each with `fan_out` outgoing weights.
    pub fn new<R: Rng>(size: usize, fan_out: usize, rng: &mut R) -> Layer {
        Layer {
            neurons: (0..size).map(|_| Neuron::new(fan_out, rng)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// The activation slots of this layer, in neuron order.
    pub fn activations(&self) -> Vec<f64> {
        self.neurons.iter().map(|n| n.activation).collect()
    }
}
