//! Platform-specific Windows implementations
//!
//! This module encapsulates all Win32 API interactions: the registry-backed
//! settings store and window placement queries.

pub mod registry;
pub mod window;
pub mod windows;

pub use registry::RegistryStore;
