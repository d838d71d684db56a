//! Portable JSON encoding of a whole [`Network`].
//!
//! Top-level fields are `input`, `hidden`, `output`, `learn` and `diff`
//! (learning rate and convergence threshold). Each neuron is written as
//! `value`, `newValue`, `weight`, `diff` and `errDiff`:
//!
//! | field      | output neuron | input / hidden neuron |
//! |------------|---------------|-----------------------|
//! | `value`    | target        | activation            |
//! | `newValue` | activation    | target (unused, 0)    |
//! | `diff`     | squared error | squared error         |
//! | `errDiff`  | delta         | delta                 |
//!
//! Capitalised names (`Input`, `NewValue`, ...) and `null` weight lists are
//! accepted on read, so files written by older tooling still load. Weights
//! stored on input neurons are ignored.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::network::network::Network;
use crate::network::neuron::Neuron;
use crate::network::spec::check_positive;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuronState {
    #[serde(alias = "Value", default)]
    pub value: f64,
    #[serde(rename = "newValue", alias = "NewValue", default)]
    pub new_value: f64,
    #[serde(alias = "Weight", default, deserialize_with = "null_as_empty")]
    pub weight: Vec<f64>,
    #[serde(alias = "Diff", default)]
    pub diff: f64,
    #[serde(rename = "errDiff", alias = "ErrDiff", default)]
    pub err_diff: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkState {
    #[serde(alias = "Input")]
    pub input: Vec<NeuronState>,
    #[serde(alias = "Hidden")]
    pub hidden: Vec<Vec<NeuronState>>,
    #[serde(alias = "Output")]
    pub output: Vec<NeuronState>,
    #[serde(alias = "Learn")]
    pub learn: f64,
    #[serde(alias = "Diff")]
    pub diff: f64,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<f64>>::deserialize(deserializer)?.unwrap_or_default())
}

impl NeuronState {
    fn encode(neuron: &Neuron, is_output: bool) -> NeuronState {
        let (value, new_value) = if is_output {
            (neuron.target, neuron.activation)
        } else {
            (neuron.activation, neuron.target)
        };
        NeuronState {
            value,
            new_value,
            weight: neuron.weights.clone(),
            diff: neuron.squared_error,
            err_diff: neuron.delta,
        }
    }

    fn encode_layer(layer: &[Neuron], is_output: bool) -> Vec<NeuronState> {
        layer.iter().map(|n| NeuronState::encode(n, is_output)).collect()
    }

    fn decode(self, is_output: bool) -> Neuron {
        let (activation, target) = if is_output {
            (self.new_value, self.value)
        } else {
            (self.value, self.new_value)
        };
        Neuron {
            activation,
            target,
            weights: self.weight,
            squared_error: self.diff,
            delta: self.err_diff,
        }
    }
}

impl From<&Network> for NetworkState {
    fn from(network: &Network) -> Self {
        NetworkState {
            input: NeuronState::encode_layer(&network.input, false),
            hidden: network.hidden.iter()
                .map(|layer| NeuronState::encode_layer(layer, false))
                .collect(),
            output: NeuronState::encode_layer(&network.output, true),
            learn: network.learning_rate,
            diff: network.convergence_threshold,
        }
    }
}

impl NetworkState {
    /// Checks the structure and rebuilds the network. Fails with
    /// `Error::Format` on empty layers, missing hidden layers, weight vectors
    /// that do not match the preceding layer, or non-positive hyperparameters.
    pub fn into_network(self) -> Result<Network> {
        self.validate()?;

        let input = self.input.into_iter()
            .map(|n| Neuron { weights: Vec::new(), ..n.decode(false) })
            .collect();
        let hidden = self.hidden.into_iter()
            .map(|layer| layer.into_iter().map(|n| n.decode(false)).collect())
            .collect();
        let output = self.output.into_iter().map(|n| n.decode(true)).collect();

        Ok(Network {
            input,
            hidden,
            output,
            learning_rate: self.learn,
            convergence_threshold: self.diff,
        })
    }

    fn validate(&self) -> Result<()> {
        if self.input.is_empty() {
            return Err(Error::Format("input layer is empty".into()));
        }
        if self.output.is_empty() {
            return Err(Error::Format("output layer is empty".into()));
        }
        if self.hidden.is_empty() {
            return Err(Error::Format("no hidden layers".into()));
        }

        let mut fan_in = self.input.len();
        for (idx, layer) in self.hidden.iter().enumerate() {
            if layer.is_empty() {
                return Err(Error::Format(format!("hidden layer {idx} is empty")));
            }
            check_fan_in(&format!("hidden layer {idx}"), layer, fan_in)?;
            fan_in = layer.len();
        }
        check_fan_in("output layer", &self.output, fan_in)?;

        check_positive("learn", self.learn).map_err(Error::Format)?;
        check_positive("diff", self.diff).map_err(Error::Format)?;
        Ok(())
    }
}

fn check_fan_in(layer_name: &str, layer: &[NeuronState], fan_in: usize) -> Result<()> {
    match layer.iter().position(|n| n.weight.len() != fan_in) {
        Some(idx) => Err(Error::Format(format!(
            "{layer_name}, neuron {idx}: expected {fan_in} weights, found {}",
            layer[idx].weight.len()
        ))),
        None => Ok(()),
    }
}
