use serde::{Serialize, Deserialize};

/// Weighted link from a node to one parent in the layer directly below.
///
/// `parent` is a position in that layer, so many edges can share one parent
/// without owning it. Only `weight` changes after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    parent: usize,
    pub weight: f64,
}

impl Edge {
    pub fn new(parent: usize, weight: f64) -> Edge {
        Edge { parent, weight }
    }

    pub fn parent(&self) -> usize {
        self.parent
    }
}
