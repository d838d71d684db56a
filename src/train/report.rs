use serde::{Serialize, Deserialize};

/// Outcome of a `train_loop` run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    /// Minimum per-sample error of the last epoch that ran.
    pub min_error: f64,
    /// Number of epochs actually run, including the one that hit the floor.
    pub epochs: usize,
    /// Whether training stopped on the early-stop floor rather than the
    /// epoch budget.
    pub converged: bool,
}
