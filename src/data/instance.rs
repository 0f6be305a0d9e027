use serde::{Serialize, Deserialize};

/// One labelled example: a feature vector and its one-hot class vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub attributes: Vec<f64>,
    pub class_values: Vec<u8>,
}

impl Instance {
    pub fn new(attributes: Vec<f64>, class_values: Vec<u8>) -> Instance {
        Instance { attributes, class_values }
    }

    /// One-hot encodes `class` into a vector of length `n_classes`.
    pub fn with_class_index(attributes: Vec<f64>, class: usize, n_classes: usize) -> Instance {
        let class_values = (0..n_classes).map(|c| u8::from(c == class)).collect();
        Instance { attributes, class_values }
    }

    /// Position of the first set class bit, if any.
    pub fn class_index(&self) -> Option<usize> {
        self.class_values.iter().position(|&v| v == 1)
    }

    /// `(attributes, classes)`.
    pub fn widths(&self) -> (usize, usize) {
        (self.attributes.len(), self.class_values.len())
    }
}
