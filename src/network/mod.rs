pub mod neuron;
pub mod network;
pub mod spec;

pub use neuron::Neuron;
pub use network::Network;
pub use spec::NetworkSpec;
