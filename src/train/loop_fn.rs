use std::time::Instant;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::report::TrainReport;
use crate::train::train_config::{TrainConfig, EARLY_STOP_FLOOR};
use crate::train::trainer::train_sample;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` sample by sample, in order, for at most
/// `config.max_epochs` epochs.
///
/// # Arguments
/// - `network` — mutable reference to the network; modified in place
/// - `inputs`  — training samples, each of length `input_count`
/// - `targets` — corresponding targets, same length as `inputs`
/// - `config`  — epoch budget and optional progress channel
///
/// # Early termination
/// After each epoch the smallest per-sample error of that epoch is compared
/// with [`EARLY_STOP_FLOOR`]; once below it the loop returns with
/// `converged = true`. Otherwise the full budget is spent.
///
/// # Errors
/// The whole dataset is checked before the first step: mismatched or empty
/// sequences give `Error::Configuration`, a wrong-length sample gives
/// `Error::DimensionMismatch`. Nothing is mutated in either case.
pub fn train_loop(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    config: &TrainConfig,
) -> Result<TrainReport> {
    check_dataset(network, inputs, targets)?;

    let mut last_min = f64::INFINITY;

    for epoch in 1..=config.max_epochs {
        let t_start = Instant::now();

        let epoch_min = run_one_epoch(network, inputs, targets)?;
        last_min = epoch_min;

        let elapsed_ms = t_start.elapsed().as_millis() as u64;
        debug!("epoch {epoch}/{}: min error {epoch_min:.8}", config.max_epochs);

        if let Some(ref tx) = config.progress_tx {
            // A vanished observer does not stop training.
            let _ = tx.send(EpochStats {
                epoch,
                total_epochs: config.max_epochs,
                min_error: epoch_min,
                elapsed_ms,
            });
        }

        if epoch_min < EARLY_STOP_FLOOR {
            info!("reached error floor after {epoch} epochs (min error {epoch_min:.8})");
            return Ok(TrainReport { min_error: epoch_min, epochs: epoch, converged: true });
        }
    }

    info!(
        "epoch budget of {} exhausted (min error {last_min:.8})",
        config.max_epochs
    );
    Ok(TrainReport { min_error: last_min, epochs: config.max_epochs, converged: false })
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One pass over the data in order. Returns the smallest sample error.
fn run_one_epoch(network: &mut Network, inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<f64> {
    let mut epoch_min = f64::INFINITY;
    for (input, target) in inputs.iter().zip(targets) {
        let err = train_sample(network, input, target)?;
        epoch_min = epoch_min.min(err);
    }
    Ok(epoch_min)
}

fn check_dataset(network: &Network, inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<()> {
    if inputs.len() != targets.len() {
        return Err(Error::Configuration(format!(
            "{} inputs but {} targets",
            inputs.len(),
            targets.len()
        )));
    }
    if inputs.is_empty() {
        return Err(Error::Configuration("training set is empty".into()));
    }
    for (input, target) in inputs.iter().zip(targets) {
        Error::check_len("input vector", network.input_count(), input.len())?;
        Error::check_len("target vector", network.output_count(), target.len())?;
    }
    Ok(())
}
