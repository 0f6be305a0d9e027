use thiserror::Error;

/// Errors raised while building, configuring or feeding a `Network`.
#[derive(Error, Debug)]
pub enum NetError {
    #[error("training set is empty; input and output widths cannot be determined")]
    EmptyTrainingSet,

    #[error("{layer} weights must be {expected:?} (rows x cols), found {found:?}")]
    WeightShape {
        layer: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("instance {index} has {found:?} (attributes, classes), expected {expected:?}")]
    InstanceShape {
        index: usize,
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("instance has {found:?} (attributes, classes), network expects {expected:?}")]
    InstanceWidth {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("{layer} node {node} edge {edge} points at parent {parent}")]
    Misaligned {
        layer: &'static str,
        node: usize,
        edge: usize,
        parent: usize,
    },

    #[error("{layer} node {node} has {found} edges, expected {expected}")]
    EdgeCount {
        layer: &'static str,
        node: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetError>;
