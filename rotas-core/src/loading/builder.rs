use geo::Point;
use hashbrown::HashSet;
use log::{debug, info, warn};

use super::config::{EDGES_FILE, NetworkConfig, VERTICES_FILE};
use super::parser::{deserialize_csv_file, deserialize_csv_reader};
use super::raw_types::{EdgeRecord, VertexRecord};
use crate::model::{StreetGraph, Vertex, VertexStore};
use crate::{Error, NO_STREET, RoutingNetwork};

const BUNDLED_VERTICES: &str = include_str!("../../data/vertices.csv");
const BUNDLED_EDGES: &str = include_str!("../../data/edges.csv");

/// Creates the routing network described by the configuration
///
/// # Errors
///
/// Returns an error if the dataset cannot be read or is inconsistent
pub fn create_network(config: &NetworkConfig) -> Result<RoutingNetwork, Error> {
    validate_config(config)?;

    let (vertices, edges) = match (config.vertices_path(), config.edges_path()) {
        (Some(vertices_path), Some(edges_path)) => {
            info!("Reading street dataset from {}", vertices_path.display());
            (
                deserialize_csv_file::<VertexRecord>(&vertices_path)?,
                deserialize_csv_file::<EdgeRecord>(&edges_path)?,
            )
        }
        _ => {
            info!("Using bundled street dataset");
            (
                deserialize_csv_reader::<VertexRecord, _>(BUNDLED_VERTICES.as_bytes())?,
                deserialize_csv_reader::<EdgeRecord, _>(BUNDLED_EDGES.as_bytes())?,
            )
        }
    };

    let network = network_from_records(vertices, &edges, config.bidirectional)?;
    info!("{} created successfully", network.summary());
    Ok(network)
}

/// Builds a network from already parsed records.
///
/// Edges that reference unknown vertices or loop onto their own origin are
/// skipped with a warning.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] if vertex ids are not contiguous from 0.
pub fn network_from_records(
    vertices: Vec<VertexRecord>,
    edges: &[EdgeRecord],
    bidirectional: bool,
) -> Result<RoutingNetwork, Error> {
    let store = VertexStore::new(vertices.into_iter().map(vertex_from_record).collect())?;
    let mut graph = StreetGraph::with_vertices(store.count());

    let mut skipped = 0;
    let mut seen = HashSet::with_capacity(edges.len());
    let mut parallel = 0;

    for edge in edges {
        if edge.origin == edge.destination {
            warn!("Skipping self-loop on vertex {}", edge.origin);
            skipped += 1;
            continue;
        }
        if !graph.add_edge(edge.origin, edge.destination, edge.distance) {
            warn!(
                "Skipping edge {} -> {}: vertex not found",
                edge.origin, edge.destination
            );
            skipped += 1;
            continue;
        }
        if !seen.insert((edge.origin, edge.destination)) {
            parallel += 1;
        }
        if bidirectional {
            graph.add_edge(edge.destination, edge.origin, edge.distance);
        }
    }

    if skipped > 0 {
        warn!("{skipped} of {} edge records were skipped", edges.len());
    }
    if parallel > 0 {
        debug!("{parallel} parallel edges kept");
    }

    RoutingNetwork::new(store, graph)
}

fn vertex_from_record(record: VertexRecord) -> Vertex {
    let street = match record.street.trim() {
        "" | NO_STREET => None,
        street => Some(street.to_string()),
    };

    Vertex {
        id: record.id,
        name: record.name,
        category: record.category,
        street,
        geometry: Point::new(record.x, record.y),
    }
}

fn validate_config(config: &NetworkConfig) -> Result<(), Error> {
    let Some(dir) = &config.data_dir else {
        return Ok(());
    };

    if !dir.is_dir() {
        return Err(Error::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Data directory not found: {}", dir.display()),
        )));
    }

    for file in [VERTICES_FILE, EDGES_FILE] {
        if !dir.join(file).is_file() {
            return Err(Error::InvalidData(format!(
                "{file} missing from data directory {}",
                dir.display()
            )));
        }
    }

    Ok(())
}
