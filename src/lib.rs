//! window-layout: persist and restore a desktop window's geometry
//!
//! The host calls [`WindowLayoutStore::load`] at startup to get the layout
//! for its new window, and [`WindowLayoutStore::query_live`] followed by
//! [`WindowLayoutStore::save`] at shutdown. On Windows the layout is stored
//! in the per-user registry via [`platform::RegistryStore`].

pub mod config;
pub mod domain;
#[cfg(windows)]
pub mod platform;
pub mod store;

pub use config::StoreConfig;
pub use domain::layout::WindowLayout;
pub use domain::placement::{PlacementSource, ShowState, WindowError, WindowPlacement};
pub use store::{MemoryStore, SettingsStore, StoreError, WindowLayoutStore};
