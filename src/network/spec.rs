use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Serialize, Deserialize};

use crate::error::{NetError, Result};
use crate::math::matrix::Matrix;

/// Range of the uniform distribution used when no initial weights are given.
pub const DEFAULT_INIT_RANGE: f64 = 0.5;

/// A serializable run configuration: hyperparameters plus optional initial
/// weights.
///
/// Fields:
/// - `hidden_nodes`   — hidden layer width, bias node excluded
/// - `learning_rate`  — step size for every weight update
/// - `max_epoch`      — full passes over the training set
/// - `seed`           — seeds the random initializer when weights are absent
/// - `log_interval`   — epochs between progress log lines
/// - `hidden_weights` — `hidden_nodes x (inputs + 1)`
/// - `output_weights` — `outputs x (hidden_nodes + 1)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub name: String,
    pub hidden_nodes: usize,
    pub learning_rate: f64,
    pub max_epoch: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub log_interval: Option<usize>,
    #[serde(default)]
    pub hidden_weights: Option<Vec<Vec<f64>>>,
    #[serde(default)]
    pub output_weights: Option<Vec<Vec<f64>>>,
}

impl NetworkSpec {
    pub fn new(name: &str, hidden_nodes: usize, learning_rate: f64, max_epoch: usize) -> Self {
        NetworkSpec {
            name: name.to_string(),
            hidden_nodes,
            learning_rate,
            max_epoch,
            seed: None,
            log_interval: None,
            hidden_weights: None,
            output_weights: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.hidden_nodes == 0 {
            return Err(NetError::InvalidParameter("hidden_nodes must be at least 1".into()));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(NetError::InvalidParameter(format!(
                "learning_rate must be finite and positive, got {}",
                self.learning_rate
            )));
        }
        if self.log_interval == Some(0) {
            return Err(NetError::InvalidParameter("log_interval must be at least 1".into()));
        }
        Ok(())
    }

    /// Returns `(hidden_weights, output_weights)` for a network with
    /// `inputs` features and `outputs` classes.
    ///
    /// Configured matrices are passed through untouched (shape checks happen
    /// when the network is built). Missing ones are drawn uniformly from
    /// `[-0.5, 0.5)`, hidden first, from a single rng stream.
    pub fn initial_weights(&self, inputs: usize, outputs: usize) -> (Matrix, Matrix) {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let hidden = match &self.hidden_weights {
            Some(rows) => Matrix::from_data(rows.clone()),
            None => Matrix::random_with(self.hidden_nodes, inputs + 1, DEFAULT_INIT_RANGE, &mut rng),
        };
        let output = match &self.output_weights {
            Some(rows) => Matrix::from_data(rows.clone()),
            None => Matrix::random_with(outputs, self.hidden_nodes + 1, DEFAULT_INIT_RANGE, &mut rng),
        };
        (hidden, output)
    }

    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let spec: NetworkSpec = serde_json::from_reader(reader)?;
        spec.validate()?;
        Ok(spec)
    }
}
