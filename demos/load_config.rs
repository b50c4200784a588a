//! Load a typed configuration from a YAML file or an inline default.
//!
//! Run with: `cargo run --example load_config [path/to/config.yaml]`

use node_decode::{decode, decode_child, set_if_exists, yaml, Decode, DecodeError, Error, Node};

#[derive(Debug)]
struct Config {
    name: String,
    listen: Endpoint,
    replicas: Vec<Endpoint>,
}

#[derive(Debug)]
struct Endpoint {
    host: String,
    port: u16,
}

impl Decode for Endpoint {
    fn decode(node: &Node) -> Result<Self, DecodeError> {
        let mut endpoint = Endpoint {
            host: decode_child(node, "host")?,
            port: 80,
        };
        set_if_exists(&mut endpoint.port, node, "port")?;
        Ok(endpoint)
    }
}

impl Decode for Config {
    fn decode(node: &Node) -> Result<Self, DecodeError> {
        let mut config = Config {
            name: decode_child(node, "name")?,
            listen: decode_child(node, "listen")?,
            replicas: Vec::new(),
        };
        set_if_exists(&mut config.replicas, node, "replicas")?;
        Ok(config)
    }
}

const DEFAULT_CONFIG: &str = "\
name: demo
listen: {host: 0.0.0.0, port: 8080}
replicas:
  - {host: replica-1}
  - {host: replica-2, port: 8081}
";

fn main() {
    let root = match std::env::args().nth(1) {
        Some(path) => yaml::read_file(&path),
        None => yaml::from_str(DEFAULT_CONFIG),
    };

    let config: Result<Config, Error> = root.and_then(|root| Ok(decode(&root)?));
    match config {
        Ok(config) => println!("loaded: {config:#?}"),
        Err(error) => eprintln!("error: {error}"),
    }
}
