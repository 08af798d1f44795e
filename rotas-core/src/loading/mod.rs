//! This module is responsible for loading the street dataset (bundled or
//! from CSV files on disk) and building the routing network.

mod builder;
mod config;
mod parser;
mod raw_types;

pub use builder::{create_network, network_from_records};
pub use config::NetworkConfig;
pub use parser::{deserialize_csv_file, deserialize_csv_reader};
pub use raw_types::{EdgeRecord, VertexRecord};
