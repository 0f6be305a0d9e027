pub mod edge;
pub mod node;

pub use edge::Edge;
pub use node::{Node, NodeRole};
