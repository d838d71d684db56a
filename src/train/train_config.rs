use std::sync::mpsc;
use crate::train::epoch_stats::EpochStats;

/// Training stops as soon as an epoch's minimum sample error falls below
/// this value. Independent of the per-sample `convergence_threshold`.
pub const EARLY_STOP_FLOOR: f64 = 0.0001;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `max_epochs`  — upper bound on full passes over the training data
/// - `progress_tx` — optional channel sender; one `EpochStats` is sent per
///                   completed epoch. A dropped receiver is ignored and
///                   training carries on.
pub struct TrainConfig {
    pub max_epochs: usize,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no progress channel.
    pub fn new(max_epochs: usize) -> Self {
        TrainConfig {
            max_epochs,
            progress_tx: None,
        }
    }

    /// Attaches a progress channel.
    pub fn with_progress(mut self, tx: mpsc::Sender<EpochStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }
}
