use serde::{Serialize, Deserialize};

/// Per-epoch training statistics returned by `train_loop`.
///
/// Error figures are measured on the forward pass that precedes each
/// instance's weight update, so they describe the network as it entered
/// that instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean `½ Σ (target - output)²` over the training set.
    pub train_error: f64,
    /// Instances whose pre-update classification missed their class.
    pub misclassified: usize,
    /// Wall-clock duration of this epoch in milliseconds.
    pub elapsed_ms: u64,
}

impl EpochStats {
    /// Fraction of training instances classified correctly, in `[0, 1]`.
    pub fn accuracy(&self, instances: usize) -> f64 {
        if instances == 0 {
            return 0.0;
        }
        1.0 - self.misclassified as f64 / instances as f64
    }
}
