use log::trace;

use crate::error::{Error, Result};
use crate::loss::squared::SquaredError;
use crate::network::network::Network;

/// One training step on a single `(input, target)` pair.
///
/// Runs the forward sweep and records each output neuron's squared error.
/// Returns the *smallest* of those errors. If it is already below the
/// network's `convergence_threshold` the weights are left as they are;
/// otherwise the output deltas are seeded and the backward sweep updates
/// every weight.
///
/// Both vectors are length-checked before anything is written, so a
/// `DimensionMismatch` leaves the network untouched.
pub fn train_sample(network: &mut Network, input: &[f64], target: &[f64]) -> Result<f64> {
    Error::check_len("input vector", network.input_count(), input.len())?;
    Error::check_len("target vector", network.output_count(), target.len())?;

    network.load_input(input)?;
    network.load_target(target)?;
    network.forward();

    let mut min_error = f64::INFINITY;
    for neuron in network.output.iter_mut() {
        neuron.squared_error = SquaredError::loss(neuron.activation, neuron.target);
        min_error = min_error.min(neuron.squared_error);
    }

    if min_error < network.convergence_threshold {
        trace!("sample below threshold ({min_error:.3e}), skipping update");
        return Ok(min_error);
    }

    for neuron in network.output.iter_mut() {
        neuron.delta = SquaredError::delta(neuron.activation, neuron.target);
    }
    network.backward();

    Ok(min_error)
}
