use rand::Rng;

use crate::codec::state::NetworkState;
use crate::error::{Error, Result};
use crate::layers::propagate::{feed_forward, propagate_back};
use crate::network::neuron::Neuron;
use crate::network::spec::NetworkSpec;
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_sample;

/// A fully connected sigmoid network: one input layer, one or more hidden
/// layers and one output layer.
///
/// Hidden layer `i` has one weight per neuron of layer `i - 1` (the input
/// layer for `i = 0`); output neurons have one weight per neuron of the last
/// hidden layer. Input neurons carry no weights.
///
/// A `Network` is plain mutable state. Forward passes overwrite activations,
/// so even `predict` needs `&mut self`; share it across threads only behind a
/// lock.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    pub input: Vec<Neuron>,
    pub hidden: Vec<Vec<Neuron>>,
    pub output: Vec<Neuron>,
    pub learning_rate: f64,
    pub convergence_threshold: f64,
}

impl Network {
    /// Builds a network from `spec`, drawing every weight uniformly from
    /// [0, 1) with `rng`.
    pub fn new<R: Rng + ?Sized>(spec: &NetworkSpec, rng: &mut R) -> Result<Network> {
        spec.validate()?;

        let input = (0..spec.input_count).map(|_| Neuron::input()).collect();

        let mut fan_in = spec.input_count;
        let mut hidden = Vec::with_capacity(spec.hidden.len());
        for &size in &spec.hidden {
            hidden.push((0..size).map(|_| Neuron::random(fan_in, rng)).collect());
            fan_in = size;
        }

        let output = (0..spec.output_count).map(|_| Neuron::random(fan_in, rng)).collect();

        Ok(Network {
            input,
            hidden,
            output,
            learning_rate: spec.learning_rate,
            convergence_threshold: spec.convergence_threshold,
        })
    }

    /// Positional form of [`Network::new`].
    pub fn create<R: Rng + ?Sized>(
        input_count: usize,
        output_count: usize,
        hidden: &[usize],
        learning_rate: f64,
        convergence_threshold: f64,
        rng: &mut R,
    ) -> Result<Network> {
        let spec = NetworkSpec::new(
            input_count,
            output_count,
            hidden.to_vec(),
            learning_rate,
            convergence_threshold,
        );
        Network::new(&spec, rng)
    }

    /// Same as [`Network::create`] but seeded from the thread-local generator,
    /// so runs are not reproducible.
    pub fn create_with_thread_rng(
        input_count: usize,
        output_count: usize,
        hidden: &[usize],
        learning_rate: f64,
        convergence_threshold: f64,
    ) -> Result<Network> {
        Network::create(
            input_count,
            output_count,
            hidden,
            learning_rate,
            convergence_threshold,
            &mut rand::thread_rng(),
        )
    }

    pub fn input_count(&self) -> usize {
        self.input.len()
    }

    pub fn output_count(&self) -> usize {
        self.output.len()
    }

    /// The shape and hyperparameters of this network as a `NetworkSpec`.
    pub fn spec(&self) -> NetworkSpec {
        NetworkSpec::new(
            self.input.len(),
            self.output.len(),
            self.hidden.iter().map(Vec::len).collect(),
            self.learning_rate,
            self.convergence_threshold,
        )
    }

    /// Runs inference and returns the output layer's activations.
    /// Weights are not touched; activations of every layer are overwritten.
    pub fn predict(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        self.load_input(input)?;
        self.forward();
        Ok(self.output.iter().map(|n| n.activation).collect())
    }

    /// One training step on a single sample. See [`train_sample`].
    pub fn train_sample(&mut self, input: &[f64], target: &[f64]) -> Result<f64> {
        train_sample(self, input, target)
    }

    /// Trains for at most `max_epochs` epochs and returns
    /// `(minimum sample error of the last epoch, epochs run)`.
    pub fn train(
        &mut self,
        inputs: &[Vec<f64>],
        targets: &[Vec<f64>],
        max_epochs: usize,
    ) -> Result<(f64, usize)> {
        let report = train_loop(self, inputs, targets, &TrainConfig::new(max_epochs))?;
        Ok((report.min_error, report.epochs))
    }

    /// Encodes the full network state as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&NetworkState::from(self))?)
    }

    /// Decodes a network previously produced by [`Network::to_json`].
    pub fn from_json(data: &str) -> Result<Network> {
        serde_json::from_str::<NetworkState>(data)?.into_network()
    }

    /// Replaces this network with the one encoded in `data`.
    /// On error `self` is left unchanged.
    pub fn import_json(&mut self, data: &str) -> Result<()> {
        *self = Network::from_json(data)?;
        Ok(())
    }

    /// Serializes the network state to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &NetworkState::from(self))
            .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))
    }

    /// Deserializes a network from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader::<_, NetworkState>(reader)?.into_network()
    }

    pub(crate) fn load_input(&mut self, input: &[f64]) -> Result<()> {
        Error::check_len("input vector", self.input.len(), input.len())?;
        for (neuron, &value) in self.input.iter_mut().zip(input) {
            neuron.activation = value;
        }
        Ok(())
    }

    pub(crate) fn load_target(&mut self, target: &[f64]) -> Result<()> {
        Error::check_len("target vector", self.output.len(), target.len())?;
        for (neuron, &value) in self.output.iter_mut().zip(target) {
            neuron.target = value;
        }
        Ok(())
    }

    /// Input → hidden[0] → … → hidden[last] → output.
    pub(crate) fn forward(&mut self) {
        let mut source: &[Neuron] = &self.input;
        for layer in self.hidden.iter_mut() {
            feed_forward(source, layer);
            source = layer.as_slice();
        }
        feed_forward(source, &mut self.output);
    }

    /// Output → hidden[last] → … → hidden[0] → input.
    /// Output deltas must be seeded before calling.
    pub(crate) fn backward(&mut self) {
        let learning_rate = self.learning_rate;
        let mut downstream: &mut [Neuron] = &mut self.output;
        for layer in self.hidden.iter_mut().rev() {
            propagate_back(learning_rate, downstream, layer);
            downstream = layer.as_mut_slice();
        }
        propagate_back(learning_rate, downstream, &mut self.input);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(hidden: &[usize]) -> Network {
        let mut rng = StdRng::seed_from_u64(42);
        Network::create(3, 2, hidden, 0.5, 0.0001, &mut rng).unwrap()
    }

    #[test]
    fn weight_lengths_follow_previous_layer() {
        let net = seeded(&[4, 7, 2]);

        assert_eq!(net.input.len(), 3);
        assert!(net.input.iter().all(|n| n.weights.is_empty()));

        let sizes = [3, 4, 7, 2];
        for (idx, layer) in net.hidden.iter().enumerate() {
            assert_eq!(layer.len(), sizes[idx + 1]);
            assert!(layer.iter().all(|n| n.weights.len() == sizes[idx]));
        }
        assert_eq!(net.output.len(), 2);
        assert!(net.output.iter().all(|n| n.weights.len() == 2));
    }

    #[test]
    fn every_weight_is_drawn_from_unit_interval() {
        let net = seeded(&[2, 5, 3]);
        let all = net.hidden.iter().flatten().chain(net.output.iter());
        for neuron in all {
            assert!(neuron.weights.iter().all(|w| (0.0..1.0).contains(w)));
        }
    }

    #[test]
    fn same_seed_gives_same_network() {
        assert_eq!(seeded(&[3]), seeded(&[3]));
    }

    #[test]
    fn rejects_invalid_construction() {
        let mut rng = StdRng::seed_from_u64(1);
        for (input, output, hidden) in [(0, 1, vec![2]), (2, 0, vec![2]), (2, 1, vec![]), (2, 1, vec![2, 0])] {
            let result = Network::create(input, output, &hidden, 0.6, 0.0001, &mut rng);
            assert!(matches!(result, Err(Error::Configuration(_))));
        }
    }

    #[test]
    fn spec_reflects_shape() {
        let net = seeded(&[4, 1]);
        assert_eq!(net.spec(), NetworkSpec::new(3, 2, vec![4, 1], 0.5, 0.0001));
    }

    #[test]
    fn predict_output_lies_in_sigmoid_range() {
        let mut net = seeded(&[4]);
        let out = net.predict(&[0.2, -3.0, 8.0]).unwrap();
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|&v| v > 0.0 && v < 1.0));
    }

    #[test]
    fn predict_rejects_wrong_length_without_mutation() {
        let mut net = seeded(&[4]);
        let before = net.clone();

        let short = net.predict(&[1.0]);
        assert!(matches!(
            short,
            Err(Error::DimensionMismatch { expected: 3, actual: 1, .. })
        ));
        assert!(net.predict(&[1.0, 2.0, 3.0, 4.0]).is_err());
        assert_eq!(net, before);
    }

    #[test]
    fn predict_does_not_touch_weights_or_targets() {
        let mut net = seeded(&[4, 4]);
        net.output[0].target = 0.25;
        let before = net.clone();

        net.predict(&[0.1, 0.2, 0.3]).unwrap();

        assert_eq!(net.output[0].target, 0.25);
        for (a, b) in net.hidden.iter().flatten().zip(before.hidden.iter().flatten()) {
            assert_eq!(a.weights, b.weights);
        }
        for (a, b) in net.output.iter().zip(&before.output) {
            assert_eq!(a.weights, b.weights);
        }
    }

    #[test]
    fn import_keeps_network_on_bad_input() {
        let mut net = seeded(&[2]);
        let before = net.clone();
        assert!(matches!(net.import_json("{not json"), Err(Error::Format(_))));
        assert_eq!(net, before);
    }
}
