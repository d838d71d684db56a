pub mod propagate;

pub use propagate::{feed_forward, propagate_back};
