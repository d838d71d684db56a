pub mod error;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod train;
pub mod codec;

// Convenience re-exports
pub use error::{Error, Result};
pub use activation::sigmoid::sigmoid;
pub use layers::propagate::{feed_forward, propagate_back};
pub use network::neuron::Neuron;
pub use network::network::Network;
pub use network::spec::NetworkSpec;
pub use loss::squared::SquaredError;
pub use codec::state::{NetworkState, NeuronState};
pub use train::{train_loop, train_sample, EpochStats, TrainConfig, TrainReport, EARLY_STOP_FLOOR};
