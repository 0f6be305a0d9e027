pub mod error;
pub mod math;
pub mod activation;
pub mod graph;
pub mod data;
pub mod network;
pub mod loss;
pub mod train;

// Convenience re-exports
pub use error::{NetError, Result};
pub use math::matrix::Matrix;
pub use activation::step::step;
pub use graph::{Edge, Node, NodeRole};
pub use data::instance::Instance;
pub use network::network::Network;
pub use network::spec::NetworkSpec;
pub use train::epoch_stats::EpochStats;
pub use train::evaluate::accuracy;
pub use train::trainer::train_instance;
