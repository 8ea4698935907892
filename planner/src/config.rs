//! Runtime configuration.
//!
//! Every setting has a default; environment variables override them:
//!
//! - `TRIP_PLANNER_DATA_DIR`: directory holding the planner database
//! - `TRIP_PLANNER_ADDR`: socket address for the local API (loopback by default)
//! - `TRIP_PLANNER_ORIGIN`: the view's origin, the only one CORS allows
//! - `TRIP_PLANNER_GEOCODER_URL`: place search endpoint

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::backend::domain::models::route::HomeBase;
use crate::backend::io::geocoding::DEFAULT_ENDPOINT;

pub const DATA_DIR_VAR: &str = "TRIP_PLANNER_DATA_DIR";
pub const ADDR_VAR: &str = "TRIP_PLANNER_ADDR";
pub const ORIGIN_VAR: &str = "TRIP_PLANNER_ORIGIN";
pub const GEOCODER_URL_VAR: &str = "TRIP_PLANNER_GEOCODER_URL";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:8080";
const DATA_DIRECTORY_NAME: &str = "Trip Planner";

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub data_directory: PathBuf,
    pub bind_address: SocketAddr,
    pub allowed_origin: String,
    pub geocoding_endpoint: String,
    pub home_base: HomeBase,
}

/// `<Documents>/Trip Planner`, falling back to the home directory and then
/// the working directory when no documents folder is known
pub fn default_data_directory() -> PathBuf {
    dirs::document_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIRECTORY_NAME)
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_directory(),
            bind_address: SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            geocoding_endpoint: DEFAULT_ENDPOINT.to_string(),
            home_base: HomeBase::default(),
        }
    }
}

impl PlannerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(dir) = get(DATA_DIR_VAR) {
            config.data_directory = PathBuf::from(dir);
        }
        if let Some(addr) = get(ADDR_VAR) {
            config.bind_address = addr.parse().with_context(|| {
                format!(
                    "{} must be a socket address like {}, got '{}'",
                    ADDR_VAR, DEFAULT_BIND_ADDRESS, addr
                )
            })?;
        }
        if let Some(origin) = get(ORIGIN_VAR) {
            config.allowed_origin = origin;
        }
        if let Some(url) = get(GEOCODER_URL_VAR) {
            config.geocoding_endpoint = url;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, PlannerConfig::default());
        assert!(config.bind_address.ip().is_loopback());
        assert!(config.data_directory.ends_with("Trip Planner"));
        assert_eq!(config.geocoding_endpoint, "https://nominatim.openstreetmap.org/search");
        assert_eq!(config.home_base.name, "Dublin");
    }

    #[test]
    fn test_overrides() {
        let config = PlannerConfig::from_lookup(lookup_from(&[
            (DATA_DIR_VAR, "/tmp/trips"),
            (ADDR_VAR, "127.0.0.1:4100"),
            (ORIGIN_VAR, "http://localhost:5173"),
            (GEOCODER_URL_VAR, "http://localhost:9000/search"),
        ]))
        .unwrap();

        assert_eq!(config.data_directory, PathBuf::from("/tmp/trips"));
        assert_eq!(config.bind_address.port(), 4100);
        assert_eq!(config.allowed_origin, "http://localhost:5173");
        assert_eq!(config.geocoding_endpoint, "http://localhost:9000/search");
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = PlannerConfig::from_lookup(lookup_from(&[(ORIGIN_VAR, "  ")])).unwrap();
        assert_eq!(config.allowed_origin, DEFAULT_ALLOWED_ORIGIN);
    }

    #[test]
    fn test_invalid_address_is_an_error() {
        let err = PlannerConfig::from_lookup(lookup_from(&[(ADDR_VAR, "localhost")])).unwrap_err();
        assert!(err.to_string().contains(ADDR_VAR));
    }
}
