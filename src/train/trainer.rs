use crate::activation::step::step;
use crate::data::instance::Instance;
use crate::error::{NetError, Result};
use crate::graph::node::Node;
use crate::network::network::Network;

/// Runs one online backpropagation step on `instance` and returns the output
/// activations seen before any weight changed.
///
/// Rejects an instance whose widths differ from the network's.
pub fn train_instance(network: &mut Network, instance: &Instance) -> Result<Vec<f64>> {
    let expected = (network.feature_count(), network.class_count());
    if instance.widths() != expected {
        return Err(NetError::InstanceWidth { expected, found: instance.widths() });
    }
    Ok(backprop(network, instance))
}

/// Unchecked step used by the epoch loop; widths were validated when the
/// network was built.
///
/// Output weights are updated first, edge by edge. The hidden pass then reads
/// the already-updated output weights together with the output activations
/// and raw sums from the forward pass, which are not recomputed.
pub(crate) fn backprop(network: &mut Network, instance: &Instance) -> Vec<f64> {
    let outputs = network.forward(&instance.attributes);
    let lr = network.learning_rate;
    let targets = &instance.class_values;

    // hidden -> output
    for (k, k_node) in network.output_layer.iter_mut().enumerate() {
        let delta_k = output_delta(k_node, targets[k]);
        for edge in k_node.inputs.iter_mut() {
            let output_j = network.hidden_layer[edge.parent()].activation();
            edge.weight += lr * output_j * delta_k;
        }
    }

    // input -> hidden
    for (pos, j_node) in network.hidden_layer.iter_mut().enumerate() {
        if !j_node.role().has_parents() {
            continue;
        }
        let gate = step(j_node.raw_sum());
        for edge in j_node.inputs.iter_mut() {
            let mut sum = 0.0;
            for (k, k_node) in network.output_layer.iter().enumerate() {
                sum += k_node.inputs[pos].weight * output_delta(k_node, targets[k]);
            }
            let output_i = network.input_layer[edge.parent()].activation();
            edge.weight += lr * output_i * gate * sum;
        }
    }

    outputs
}

/// `(target - output) * step(raw_sum)` for one output node.
fn output_delta(node: &Node, target: u8) -> f64 {
    let error = f64::from(target) - node.activation();
    error * step(node.raw_sum())
}
