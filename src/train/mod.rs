pub mod loop_fn;
pub mod train_config;
pub mod trainer;

pub use loop_fn::{sample_product, train_loop};
pub use train_config::TrainConfig;
pub use trainer::train_step;
