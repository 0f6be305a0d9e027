use crate::data::instance::Instance;
use crate::error::{NetError, Result};
use crate::graph::node::{Node, NodeRole};
use crate::math::matrix::Matrix;
use crate::network::spec::NetworkSpec;
use crate::train::epoch_stats::EpochStats;
use crate::train::loop_fn::train_loop;

/// One-hidden-layer network stored as three layers of nodes.
///
/// The last node of `input_layer` and of `hidden_layer` is a bias node.
/// Edges address their parent by position in the layer directly below, and
/// output edge `j` always points at hidden position `j`; training relies on
/// that alignment.
#[derive(Debug, Clone)]
pub struct Network {
    pub(crate) input_layer: Vec<Node>,
    pub(crate) hidden_layer: Vec<Node>,
    pub(crate) output_layer: Vec<Node>,
    pub(crate) training_set: Vec<Instance>,
    pub(crate) learning_rate: f64,
    pub(crate) max_epoch: usize,
    pub(crate) log_interval: usize,
}

impl Network {
    /// Builds and wires the graph.
    ///
    /// Input and output widths come from `training_set[0]`.
    /// `hidden_weights[h][i]` is the weight from input node `i` to hidden node
    /// `h`; `output_weights[o][h]` from hidden node `h` to output node `o`.
    /// Column `inputs` (resp. `hidden_node_count`) is the bias weight.
    pub fn new(
        training_set: Vec<Instance>,
        hidden_node_count: usize,
        learning_rate: f64,
        max_epoch: usize,
        hidden_weights: Matrix,
        output_weights: Matrix,
    ) -> Result<Network> {
        let first = training_set.first().ok_or(NetError::EmptyTrainingSet)?;
        let (input_node_count, output_node_count) = first.widths();

        for (index, instance) in training_set.iter().enumerate() {
            if instance.widths() != (input_node_count, output_node_count) {
                return Err(NetError::InstanceShape {
                    index,
                    expected: (input_node_count, output_node_count),
                    found: instance.widths(),
                });
            }
        }
        if !learning_rate.is_finite() {
            return Err(NetError::InvalidParameter(format!(
                "learning_rate must be finite, got {learning_rate}"
            )));
        }
        check_shape("hidden", &hidden_weights, (hidden_node_count, input_node_count + 1))?;
        check_shape("output", &output_weights, (output_node_count, hidden_node_count + 1))?;

        let mut input_layer: Vec<Node> = (0..input_node_count)
            .map(|_| Node::new(NodeRole::Input))
            .collect();
        input_layer.push(Node::new(NodeRole::InputBias));

        let mut hidden_layer: Vec<Node> = hidden_weights.data.iter()
            .map(|row| Node::wired(NodeRole::Hidden, row))
            .collect();
        hidden_layer.push(Node::new(NodeRole::HiddenBias));

        let output_layer: Vec<Node> = output_weights.data.iter()
            .map(|row| Node::wired(NodeRole::Output, row))
            .collect();

        let network = Network {
            input_layer,
            hidden_layer,
            output_layer,
            training_set,
            learning_rate,
            max_epoch,
            log_interval: (max_epoch / 10).max(1),
        };
        network.verify_alignment()?;

        tracing::debug!(
            inputs = input_node_count,
            hidden = hidden_node_count,
            outputs = output_node_count,
            instances = network.training_set.len(),
            "network wired"
        );
        Ok(network)
    }

    /// Builds a network from a run configuration, generating any initial
    /// weights the configuration leaves out.
    pub fn from_spec(training_set: Vec<Instance>, spec: &NetworkSpec) -> Result<Network> {
        spec.validate()?;
        let (inputs, outputs) = training_set.first()
            .ok_or(NetError::EmptyTrainingSet)?
            .widths();
        let (hidden_weights, output_weights) = spec.initial_weights(inputs, outputs);
        let mut network = Network::new(
            training_set,
            spec.hidden_nodes,
            spec.learning_rate,
            spec.max_epoch,
            hidden_weights,
            output_weights,
        )?;
        if let Some(interval) = spec.log_interval {
            network.log_interval = interval;
        }
        Ok(network)
    }

    /// Sets how many epochs pass between progress log lines. Zero is clamped to 1.
    pub fn with_log_interval(mut self, interval: usize) -> Network {
        self.log_interval = interval.max(1);
        self
    }

    /// Checks that every edge points at the parent position equal to its own
    /// index. Construction always satisfies this; the check guards against
    /// the wiring order drifting.
    fn verify_alignment(&self) -> Result<()> {
        let layers: [(&'static str, &[Node], usize); 2] = [
            ("hidden", &self.hidden_layer, self.input_layer.len()),
            ("output", &self.output_layer, self.hidden_layer.len()),
        ];
        for (layer, nodes, below) in layers {
            for (node, n) in nodes.iter().enumerate() {
                let expected = if n.role().has_parents() { below } else { 0 };
                if n.inputs().len() != expected {
                    return Err(NetError::EdgeCount { layer, node, expected, found: n.inputs().len() });
                }
                for (edge, e) in n.inputs().iter().enumerate() {
                    if e.parent() != edge {
                        return Err(NetError::Misaligned { layer, node, edge, parent: e.parent() });
                    }
                }
            }
        }
        Ok(())
    }

    /// Injects `attributes` into the input nodes, then evaluates every hidden
    /// node and every output node in layer order. Returns the output
    /// activations.
    ///
    /// Extra attributes are ignored; missing ones leave the corresponding
    /// input node at its previous value. Use `try_classify` to reject
    /// mismatched widths.
    pub fn forward(&mut self, attributes: &[f64]) -> Vec<f64> {
        let features = self.feature_count();
        for (node, &value) in self.input_layer[..features].iter_mut().zip(attributes) {
            node.set_input(value);
        }
        for node in &mut self.hidden_layer {
            node.calculate_output(&self.input_layer);
        }
        for node in &mut self.output_layer {
            node.calculate_output(&self.hidden_layer);
        }
        self.output_activations()
    }

    /// Runs a forward pass and returns the index of the winning output node.
    /// See `pick_class` for the tie rule.
    pub fn classify(&mut self, instance: &Instance) -> usize {
        self.forward(&instance.attributes);
        pick_class(&self.output_activations())
    }

    /// Like `classify`, but rejects an instance whose attribute count does not
    /// match the input layer.
    pub fn try_classify(&mut self, instance: &Instance) -> Result<usize> {
        if instance.attributes.len() != self.feature_count() {
            return Err(NetError::InstanceWidth {
                expected: (self.feature_count(), self.class_count()),
                found: instance.widths(),
            });
        }
        Ok(self.classify(instance))
    }

    /// Trains for `max_epoch` epochs over the training set, in order.
    pub fn train(&mut self) {
        self.train_with_stats();
    }

    /// Same as `train`, returning one `EpochStats` per completed epoch.
    pub fn train_with_stats(&mut self) -> Vec<EpochStats> {
        train_loop(self)
    }

    pub fn output_activations(&self) -> Vec<f64> {
        self.output_layer.iter().map(Node::activation).collect()
    }

    pub fn input_layer(&self) -> &[Node] {
        &self.input_layer
    }

    pub fn hidden_layer(&self) -> &[Node] {
        &self.hidden_layer
    }

    pub fn output_layer(&self) -> &[Node] {
        &self.output_layer
    }

    pub fn training_set(&self) -> &[Instance] {
        &self.training_set
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn max_epoch(&self) -> usize {
        self.max_epoch
    }

    pub fn log_interval(&self) -> usize {
        self.log_interval
    }

    /// Input nodes excluding the bias.
    pub fn feature_count(&self) -> usize {
        self.input_layer.len() - 1
    }

    /// Hidden nodes excluding the bias.
    pub fn hidden_count(&self) -> usize {
        self.hidden_layer.len() - 1
    }

    pub fn class_count(&self) -> usize {
        self.output_layer.len()
    }

    /// Current input→hidden weights, same layout as the constructor argument.
    pub fn hidden_weights(&self) -> Matrix {
        weights_of(&self.hidden_layer)
    }

    /// Current hidden→output weights, same layout as the constructor argument.
    pub fn output_weights(&self) -> Matrix {
        weights_of(&self.output_layer)
    }
}

/// Scans `outputs` left to right and returns the winning index.
///
/// Each value is rounded to two decimals and compared with `>=` against the
/// running maximum, but the maximum is updated with the unrounded value.
/// Equal outputs therefore resolve to the later index, and a running maximum
/// of 0 accepts any non-negative output.
pub fn pick_class(outputs: &[f64]) -> usize {
    let mut max = 0.0;
    let mut max_index = 0;
    for (i, &output) in outputs.iter().enumerate() {
        if round_hundredths(output) >= max {
            max = output;
            max_index = i;
        }
    }
    max_index
}

/// Half-up rounding to two decimal places.
fn round_hundredths(x: f64) -> f64 {
    (x * 100.0 + 0.5).floor() / 100.0
}

fn check_shape(layer: &'static str, weights: &Matrix, expected: (usize, usize)) -> Result<()> {
    let (rows, cols) = expected;
    // With no rows there is no column count to compare.
    if weights.is_rectangular() && weights.rows == rows && (rows == 0 || weights.cols == cols) {
        return Ok(());
    }
    let found_cols = weights.data.iter()
        .map(Vec::len)
        .find(|&len| len != cols)
        .unwrap_or(weights.cols);
    Err(NetError::WeightShape { layer, expected, found: (weights.data.len(), found_cols) })
}

fn weights_of(layer: &[Node]) -> Matrix {
    Matrix::from_data(
        layer.iter()
            .filter(|node| node.role().has_parents())
            .map(|node| node.inputs().iter().map(|edge| edge.weight).collect())
            .collect(),
    )
}
