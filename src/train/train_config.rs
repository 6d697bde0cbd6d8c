use serde::{Serialize, Deserialize};

use crate::optim::update_rule::UpdateRule;

/// Hyperparameters for a `train_loop` run.
///
/// # Fields
/// - `learning_rate`  — scale applied to every batch increment
/// - `stop_mse`       — training stops as soon as an iteration's MSE drops
///                      strictly below this value
/// - `max_iterations` — hard cap on the number of iterations executed
/// - `update_rule`    — how feature weights are moved (see `UpdateRule`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub stop_mse: f64,
    pub max_iterations: usize,
    #[serde(default)]
    pub update_rule: UpdateRule,
}

impl TrainConfig {
    /// Creates a `TrainConfig` using the default `UpdateRule`.
    pub fn new(learning_rate: f64, stop_mse: f64, max_iterations: usize) -> Self {
        TrainConfig {
            learning_rate,
            stop_mse,
            max_iterations,
            update_rule: UpdateRule::default(),
        }
    }

    pub fn with_update_rule(mut self, update_rule: UpdateRule) -> Self {
        self.update_rule = update_rule;
        self
    }

    /// Serializes the hyperparameters to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes hyperparameters from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(0.05, 0.001, 1000)
    }
}
