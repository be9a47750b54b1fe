//! Persistent settings storage
//!
//! `SettingsStore` is the seam to the per-user key-value store. Backends
//! report typed errors; `WindowLayoutStore` absorbs them and falls back to
//! defaults so the host always gets a usable layout.

pub mod layout_store;
pub mod memory;

pub use layout_store::WindowLayoutStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Error types for settings store operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Failed to open settings namespace {namespace} (code {code})")]
    Open { namespace: String, code: u32 },
    #[error("Failed to read value {name} (code {code})")]
    Read { name: String, code: u32 },
    #[error("Failed to write value {name} (code {code})")]
    Write { name: String, code: u32 },
    #[error("Value {name} is not a 32-bit integer")]
    TypeMismatch { name: String },
    #[error("Settings store is unavailable")]
    Unavailable,
}

/// Flat namespace of 32-bit unsigned scalar values
///
/// Each call acquires and releases whatever handle it needs; no handle is
/// held between calls.
pub trait SettingsStore {
    /// Reads a value. `Ok(None)` means the value (or namespace) is absent.
    fn read_u32(&self, name: &str) -> Result<Option<u32>, StoreError>;

    /// Writes a value, creating the namespace if needed
    fn write_u32(&self, name: &str, value: u32) -> Result<(), StoreError>;
}

impl<T: SettingsStore + ?Sized> SettingsStore for &T {
    fn read_u32(&self, name: &str) -> Result<Option<u32>, StoreError> {
        (**self).read_u32(name)
    }

    fn write_u32(&self, name: &str, value: u32) -> Result<(), StoreError> {
        (**self).write_u32(name, value)
    }
}
