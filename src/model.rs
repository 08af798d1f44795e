//! The street network shared by every exported function
//!
//! The C ABI has no context argument, so the boundary keeps one network per
//! process. It is built on first use from [`NetworkConfig::from_env`] and is
//! read-only afterwards; the routing engine only ever receives it by
//! reference.

use std::sync::OnceLock;

use log::{error, info};
use rotas_core::prelude::*;

/// Environment variable holding the `env_logger` filter
pub const LOG_VAR: &str = "ROTAS_LOG";

static NETWORK: OnceLock<Option<RoutingNetwork>> = OnceLock::new();

/// The loaded network, or `None` if the dataset failed to load
pub fn network() -> Option<&'static RoutingNetwork> {
    NETWORK.get_or_init(load_network).as_ref()
}

fn load_network() -> Option<RoutingNetwork> {
    init_logging();

    let config = NetworkConfig::from_env();
    match create_network(&config) {
        Ok(network) => {
            info!("Street network ready: {}", network.summary());
            Some(network)
        }
        Err(e) => {
            error!("Failed to load street network: {e}");
            None
        }
    }
}

/// Installs `env_logger` unless the host process already set up a logger
fn init_logging() {
    let env = env_logger::Env::new().filter_or(LOG_VAR, "warn");
    // Err only means another logger is already installed
    let _ = env_logger::Builder::from_env(env).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_is_loaded_once() {
        let first = network().unwrap();
        let second = network().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.vertex_count(), 120);
    }
}
