use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::Error;

/// Deserializes every row of a CSV file with a header line
///
/// # Errors
///
/// Fails if the file cannot be opened or any row does not match `T`.
pub fn deserialize_csv_file<T>(path: &Path) -> Result<Vec<T>, Error>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    deserialize_csv_reader(file)
}

/// Deserializes every row of CSV data with a header line
///
/// # Errors
///
/// Fails on the first row that does not match `T`.
pub fn deserialize_csv_reader<T, R>(reader: R) -> Result<Vec<T>, Error>
where
    T: for<'de> serde::Deserialize<'de>,
    R: Read,
{
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(Error::from)
}
