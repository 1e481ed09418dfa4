//! Configuration for the `LocalStore`.

use std::path::PathBuf;

/// Configuration for the local string-keyed store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding one JSON file per storage key
    pub root: PathBuf,
    /// Write pretty-printed JSON instead of the compact form
    pub pretty: bool,
    /// Fail the whole load on the first corrupt or invalid record
    /// instead of skipping it
    pub strict: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("data"),
            pretty: false,
            strict: false,
        }
    }
}
