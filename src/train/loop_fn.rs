use std::time::Instant;

use crate::loss::squared_error::SquaredError;
use crate::network::network::{pick_class, Network};
use crate::train::epoch_stats::EpochStats;
use crate::train::trainer::backprop;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for its configured number of epochs over its own training
/// set and returns one `EpochStats` per epoch.
///
/// Instances are visited in their original order every epoch; there is no
/// shuffling and no early termination. Progress is logged through `tracing`
/// on the first epoch, the last epoch and every `log_interval` epochs.
pub fn train_loop(network: &mut Network) -> Vec<EpochStats> {
    let total_epochs = network.max_epoch;
    let interval = network.log_interval.max(1);
    let mut history = Vec::with_capacity(total_epochs);

    // The set is moved out so the network can be borrowed mutably per instance.
    let instances = std::mem::take(&mut network.training_set);

    for epoch in 1..=total_epochs {
        let t_start = Instant::now();

        let mut total_error = 0.0;
        let mut misclassified = 0;
        for instance in &instances {
            let outputs = backprop(network, instance);
            total_error += SquaredError::loss(&outputs, &instance.class_values);
            if Some(pick_class(&outputs)) != instance.class_index() {
                misclassified += 1;
            }
        }

        let stats = EpochStats {
            epoch,
            total_epochs,
            train_error: SquaredError::mean(total_error, instances.len()),
            misclassified,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };

        if epoch == 1 || epoch == total_epochs || epoch % interval == 0 {
            tracing::info!(
                "Epoch {}/{}: error={:.6}, misclassified={}/{}",
                epoch, total_epochs, stats.train_error, misclassified, instances.len()
            );
        }

        history.push(stats);
    }

    network.training_set = instances;
    history
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::instance::Instance;

    fn two_class_net(max_epoch: usize) -> Network {
        Network::new(
            vec![
                Instance::new(vec![1.0], vec![1, 0]),
                Instance::new(vec![0.0], vec![0, 1]),
            ],
            1,
            1.0,
            max_epoch,
            vec![vec![0.5, 0.5]].into(),
            vec![vec![0.5, 0.5], vec![0.5, 0.5]].into(),
        )
        .unwrap()
    }

    #[test]
    fn one_stats_entry_per_epoch() {
        let mut network = two_class_net(4);
        let history = train_loop(&mut network);
        assert_eq!(history.len(), 4);
        assert_eq!(history.iter().map(|s| s.epoch).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert!(history.iter().all(|s| s.total_epochs == 4));
    }

    #[test]
    fn training_set_is_restored() {
        let mut network = two_class_net(2);
        train_loop(&mut network);
        assert_eq!(network.training_set().len(), 2);
        assert_eq!(network.training_set()[1].class_values, vec![0, 1]);
    }

    #[test]
    fn first_epoch_error_is_measured_before_updates() {
        // Instance 0 enters with outputs [1, 1]: error 0.5, classified as 1.
        let mut network = two_class_net(1);
        let history = train_loop(&mut network);
        assert!(history[0].misclassified >= 1);
        assert!(history[0].train_error >= 0.25);
    }

    #[test]
    fn zero_epochs_changes_nothing() {
        let mut network = two_class_net(0);
        let before = network.output_weights();
        assert!(train_loop(&mut network).is_empty());
        assert_eq!(network.output_weights(), before);
    }
}
