use crate::data::instance::Instance;
use crate::network::network::Network;

/// Fraction of `instances` whose `classify` result matches their class
/// index. Weights are not touched; node activations are overwritten.
pub fn accuracy(network: &mut Network, instances: &[Instance]) -> f64 {
    if instances.is_empty() {
        return 0.0;
    }
    let correct = instances.iter()
        .filter(|inst| Some(network.classify(inst)) == inst.class_index())
        .count();
    correct as f64 / instances.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_matching_predictions() {
        // Both outputs always fire, so every instance is classified as 1.
        let set = vec![
            Instance::new(vec![1.0], vec![1, 0]),
            Instance::new(vec![2.0], vec![0, 1]),
        ];
        let mut network = Network::new(
            set.clone(),
            1,
            1.0,
            1,
            vec![vec![0.5, 0.5]].into(),
            vec![vec![0.5, 0.5], vec![0.5, 0.5]].into(),
        )
        .unwrap();
        let before = network.output_weights();
        assert_eq!(accuracy(&mut network, &set), 0.5);
        assert_eq!(accuracy(&mut network, &[]), 0.0);
        assert_eq!(network.output_weights(), before);
    }
}
