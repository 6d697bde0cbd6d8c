pub mod error;
pub mod activation;
pub mod loss;
pub mod optim;
pub mod perceptron;
pub mod train;

// Convenience re-exports
pub use error::{PerceptronError, Result};
pub use activation::activation::ActivationFunction;
pub use loss::mse::MseLoss;
pub use optim::update_rule::UpdateRule;
pub use perceptron::perceptron::Perceptron;
pub use train::{train_loop, TrainConfig, TrainReport};
