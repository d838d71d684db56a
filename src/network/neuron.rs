use rand::Rng;

/// One unit of the network: its current state plus the weights of its
/// incoming connections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Neuron {
    /// Output of the last forward pass (or the loaded feature for input neurons).
    pub activation: f64,
    /// Caller-supplied training target. Only meaningful on the output layer.
    pub target: f64,
    /// One weight per neuron of the preceding layer. Empty for input neurons.
    pub weights: Vec<f64>,
    /// (activation - target)² from the last training step. Output layer only.
    pub squared_error: f64,
    /// Backpropagated error signal from the last backward pass.
    pub delta: f64,
}

impl Neuron {
    /// An input neuron: no incoming connections.
    pub fn input() -> Neuron {
        Neuron::default()
    }

    /// A neuron with `fan_in` weights drawn uniformly from [0, 1).
    pub fn random<R: Rng + ?Sized>(fan_in: usize, rng: &mut R) -> Neuron {
        let weights = (0..fan_in).map(|_| rng.gen::<f64>()).collect();
        Neuron::with_weights(weights)
    }

    pub fn with_weights(weights: Vec<f64>) -> Neuron {
        Neuron {
            weights,
            ..Neuron::default()
        }
    }
}
