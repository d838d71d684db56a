use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};

/// A serializable description of a network's shape and hyperparameters.
///
/// `NetworkSpec` can be saved to / loaded from JSON independently of any
/// trained weights, so a run can be configured before a network exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Number of input features.
    pub input_count: usize,
    /// Number of output dimensions.
    pub output_count: usize,
    /// Hidden layer sizes, first to last. Must not be empty.
    pub hidden: Vec<usize>,
    /// Gradient step size.
    pub learning_rate: f64,
    /// Per-sample squared error below which a sample is left untouched.
    pub convergence_threshold: f64,
}

impl NetworkSpec {
    pub fn new(
        input_count: usize,
        output_count: usize,
        hidden: Vec<usize>,
        learning_rate: f64,
        convergence_threshold: f64,
    ) -> NetworkSpec {
        NetworkSpec { input_count, output_count, hidden, learning_rate, convergence_threshold }
    }

    /// Checks every construction constraint, returning `Error::Configuration`
    /// naming the first one violated.
    pub fn validate(&self) -> Result<()> {
        if self.input_count == 0 {
            return Err(Error::Configuration("input_count must be positive".into()));
        }
        if self.output_count == 0 {
            return Err(Error::Configuration("output_count must be positive".into()));
        }
        if self.hidden.is_empty() {
            return Err(Error::Configuration("at least one hidden layer is required".into()));
        }
        if let Some(idx) = self.hidden.iter().position(|&size| size == 0) {
            return Err(Error::Configuration(format!("hidden layer {idx} has no neurons")));
        }
        check_positive("learning_rate", self.learning_rate).map_err(Error::Configuration)?;
        check_positive("convergence_threshold", self.convergence_threshold)
            .map_err(Error::Configuration)?;
        Ok(())
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))
    }

    /// Deserializes and validates a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let spec: NetworkSpec = serde_json::from_reader(reader)
            .map_err(|e| Error::Configuration(e.to_string()))?;
        spec.validate()?;
        Ok(spec)
    }
}

/// Hyperparameters must be finite and strictly positive.
pub(crate) fn check_positive(name: &str, value: f64) -> std::result::Result<(), String> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(format!("{name} must be a positive finite number, got {value}"))
    }
}
