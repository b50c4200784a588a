//! Show how decode errors trace a path through the document.
//!
//! Run with: `cargo run --example error_trace`

use indexmap::IndexMap;
use node_decode::{decode, yaml};

const BROKEN: &str = "\
thresholds:
  low: [1, 2, 3]
  high: [10, twenty, 30]
";

fn main() {
    let root = yaml::from_str(BROKEN).expect("document is well-formed YAML");

    match decode::<IndexMap<String, IndexMap<String, Vec<i64>>>>(&root) {
        Ok(_) => unreachable!("the document contains a bad scalar"),
        Err(error) => {
            // One diagnostic line: message plus the path, deepest node first.
            eprintln!("error: {error}");
            eprintln!("trace only: {}", error.format_trace());
        }
    }
}
