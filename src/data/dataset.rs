//! JSON dataset loading.
//!
//! Expected format: an array of objects
//! `{ "attributes": [f64, ...], "class_values": [0|1, ...] }`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::data::instance::Instance;
use crate::error::Result;

pub fn parse_instances_json(text: &str) -> Result<Vec<Instance>> {
    Ok(serde_json::from_str(text)?)
}

pub fn load_instances_json<P: AsRef<Path>>(path: P) -> Result<Vec<Instance>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let instances: Vec<Instance> = serde_json::from_reader(reader)?;
    tracing::debug!(count = instances.len(), "loaded instances");
    Ok(instances)
}
