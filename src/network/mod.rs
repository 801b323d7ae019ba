pub mod network;
pub mod neuron;

pub use network::{NeuralNetwork, HIDDEN_NEURONS, INPUT_NEURONS, OUTPUT_NEURONS};
pub use neuron::{Layer, Neuron};
