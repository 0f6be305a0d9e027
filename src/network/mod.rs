pub mod network;
pub mod spec;

pub use network::{pick_class, Network};
pub use spec::NetworkSpec;
