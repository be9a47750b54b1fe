//! Configuration for window-layout
//!
//! Holds the registry namespace the layout is stored under and the fixed
//! value names of the stored schema.

pub mod keys;

/// Namespace used when the host does not pick one
pub const DEFAULT_NAMESPACE: &str = r"SOFTWARE\FileVault";

/// Where the layout lives in the per-user settings store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key path below the per-user root (`HKEY_CURRENT_USER` on Windows)
    pub namespace: String,
}

impl StoreConfig {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}
