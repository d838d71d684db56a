pub mod state;

pub use state::{NetworkState, NeuronState};
