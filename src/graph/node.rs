use serde::{Serialize, Deserialize};

use crate::activation::step::step;
use crate::graph::edge::Edge;

/// What a node does in the network. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    Input,
    InputBias,
    Hidden,
    HiddenBias,
    Output,
}

impl NodeRole {
    pub fn is_bias(self) -> bool {
        matches!(self, NodeRole::InputBias | NodeRole::HiddenBias)
    }

    /// Hidden and output nodes are the only ones wired to a layer below.
    pub fn has_parents(self) -> bool {
        matches!(self, NodeRole::Hidden | NodeRole::Output)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    role: NodeRole,
    pub(crate) inputs: Vec<Edge>,
    raw_sum: f64,
    activation: f64,
}

impl Node {
    /// Creates an unwired node. Bias nodes start (and stay) at activation 1.
    pub fn new(role: NodeRole) -> Node {
        Node {
            role,
            inputs: Vec::new(),
            raw_sum: 0.0,
            activation: if role.is_bias() { 1.0 } else { 0.0 },
        }
    }

    /// Creates a hidden or output node wired to every node of the layer below,
    /// edge `i` pointing at position `i` with weight `weights[i]`.
    pub(crate) fn wired(role: NodeRole, weights: &[f64]) -> Node {
        let mut node = Node::new(role);
        node.inputs = weights.iter()
            .enumerate()
            .map(|(parent, &weight)| Edge::new(parent, weight))
            .collect();
        node
    }

    pub fn role(&self) -> NodeRole {
        self.role
    }

    pub fn inputs(&self) -> &[Edge] {
        &self.inputs
    }

    pub fn raw_sum(&self) -> f64 {
        self.raw_sum
    }

    pub fn activation(&self) -> f64 {
        self.activation
    }

    /// Injects one feature value. Only input nodes accept a value; any other
    /// role is left untouched.
    pub fn set_input(&mut self, value: f64) {
        if self.role == NodeRole::Input {
            self.activation = value;
        } else {
            tracing::warn!(role = ?self.role, "set_input ignored on non-input node");
        }
    }

    /// Recomputes `raw_sum` from the already-evaluated `layer_below` and
    /// fires through the step function. No-op for input and bias nodes.
    ///
    /// `layer_below` must be the layer this node was wired against.
    pub(crate) fn calculate_output(&mut self, layer_below: &[Node]) {
        if !self.role.has_parents() {
            return;
        }
        self.raw_sum = self.inputs.iter()
            .map(|edge| layer_below[edge.parent()].activation * edge.weight)
            .sum();
        self.activation = step(self.raw_sum);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(values: &[f64]) -> Vec<Node> {
        let mut layer: Vec<Node> = values.iter()
            .map(|&v| {
                let mut n = Node::new(NodeRole::Input);
                n.set_input(v);
                n
            })
            .collect();
        layer.push(Node::new(NodeRole::InputBias));
        layer
    }

    #[test]
    fn bias_nodes_are_constant_one() {
        let mut bias = Node::new(NodeRole::HiddenBias);
        bias.calculate_output(&inputs(&[5.0]));
        bias.set_input(3.0);
        assert_eq!(bias.activation(), 1.0);
        assert!(bias.inputs().is_empty());
    }

    #[test]
    fn set_input_only_affects_input_role() {
        let mut hidden = Node::wired(NodeRole::Hidden, &[1.0]);
        hidden.set_input(0.7);
        assert_eq!(hidden.activation(), 0.0);

        let mut input = Node::new(NodeRole::Input);
        input.set_input(0.7);
        assert_eq!(input.activation(), 0.7);
    }

    #[test]
    fn weighted_sum_includes_bias() {
        let below = inputs(&[2.0, -1.0]);
        let mut node = Node::wired(NodeRole::Hidden, &[0.5, 1.0, -0.25]);
        node.calculate_output(&below);
        assert_eq!(node.raw_sum(), 2.0 * 0.5 - 1.0 - 0.25);
        assert_eq!(node.activation(), 0.0);
    }

    #[test]
    fn zero_sum_does_not_fire() {
        let below = inputs(&[1.0]);
        let mut node = Node::wired(NodeRole::Output, &[1.0, -1.0]);
        node.calculate_output(&below);
        assert_eq!(node.raw_sum(), 0.0);
        assert_eq!(node.activation(), 0.0);
    }

    #[test]
    fn input_node_calculate_output_is_noop() {
        let mut input = Node::new(NodeRole::Input);
        input.set_input(-4.0);
        input.calculate_output(&[]);
        assert_eq!(input.activation(), -4.0);
        assert_eq!(input.raw_sum(), 0.0);
    }
}
