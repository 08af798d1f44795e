use std::env;
use std::path::PathBuf;

pub const VERTICES_FILE: &str = "vertices.csv";
pub const EDGES_FILE: &str = "edges.csv";

/// Where the street dataset comes from and how its edges are read
#[derive(Debug, Clone, Default)]
pub struct NetworkConfig {
    /// Directory holding `vertices.csv` and `edges.csv`; `None` uses the bundled dataset
    pub data_dir: Option<PathBuf>,
    /// Insert the reverse of every edge record
    pub bidirectional: bool,
}

impl NetworkConfig {
    pub const DATA_DIR_VAR: &'static str = "ROTAS_DATA_DIR";
    pub const BIDIRECTIONAL_VAR: &'static str = "ROTAS_BIDIRECTIONAL";

    /// Reads `ROTAS_DATA_DIR` and `ROTAS_BIDIRECTIONAL`
    pub fn from_env() -> Self {
        let data_dir = env::var_os(Self::DATA_DIR_VAR)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);
        let bidirectional = env::var(Self::BIDIRECTIONAL_VAR)
            .map(|value| parse_flag(&value))
            .unwrap_or(false);

        Self {
            data_dir,
            bidirectional,
        }
    }

    pub fn vertices_path(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| dir.join(VERTICES_FILE))
    }

    pub fn edges_path(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| dir.join(EDGES_FILE))
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
