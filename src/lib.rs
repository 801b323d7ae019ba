pub mod activation;
pub mod error;
pub mod network;
pub mod train;

// Convenience re-exports
pub use activation::activation::Activation;
pub use error::NetworkError;
pub use network::network::{NeuralNetwork, HIDDEN_NEURONS, INPUT_NEURONS, OUTPUT_NEURONS};
pub use network::neuron::{Layer, Neuron};
pub use train::loop_fn::{sample_product, train_loop};
pub use train::train_config::TrainConfig;
pub use train::trainer::train_step;
