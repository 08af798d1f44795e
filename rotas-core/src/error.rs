use thiserror::Error;

use crate::VertexId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),
    #[error("Point of interest {0} not found")]
    PointNotFound(usize),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
