pub mod dataset;
pub mod instance;

pub use dataset::{load_instances_json, parse_instances_json};
pub use instance::Instance;
