use crate::activation::sigmoid;
use crate::network::neuron::Neuron;

/// Computes every neuron of `target` from the activations of `source`:
/// `activation = sigmoid(Σ source[s].activation · weights[s])`.
pub fn feed_forward(source: &[Neuron], target: &mut [Neuron]) {
    for neuron in target.iter_mut() {
        debug_assert_eq!(neuron.weights.len(), source.len());
        let sum: f64 = source.iter()
            .zip(neuron.weights.iter())
            .map(|(s, w)| s.activation * w)
            .sum();
        neuron.activation = sigmoid(sum);
    }
}

/// One step of the delta rule between two adjacent layers.
///
/// `downstream` must already carry its deltas. Each incoming weight of a
/// downstream neuron moves by `lr · delta · upstream.activation`, and the
/// upstream neuron accumulates `delta · w · a · (1 - a)` where `w` is the
/// weight as it was *before* this update.
///
/// Upstream deltas are zeroed first, so after the call `upstream` holds the
/// deltas for the next pair.
pub fn propagate_back(learning_rate: f64, downstream: &mut [Neuron], upstream: &mut [Neuron]) {
    for neuron in upstream.iter_mut() {
        neuron.delta = 0.0;
    }

    for neuron in downstream.iter_mut() {
        debug_assert_eq!(neuron.weights.len(), upstream.len());
        let delta = neuron.delta;
        for (weight, source) in neuron.weights.iter_mut().zip(upstream.iter_mut()) {
            let old = *weight;
            let value = source.activation;
            *weight = old - (value * -delta * learning_rate);
            source.delta += (delta * old) * value * (1.0 - value);
        }
    }
}
