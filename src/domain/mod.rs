//! Domain types
//!
//! Pure data types independent of Win32 APIs and platform-specific
//! implementations.

pub mod core;
pub mod layout;
pub mod placement;
