//! Window placement records
//!
//! Portable form of the windowing system's placement query. The platform
//! layer implements `PlacementSource` for native handles; tests implement it
//! with fixed records.

use crate::domain::core::Rect;
use thiserror::Error;

/// Show state reported by the windowing system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowState {
    Normal,
    Minimized,
    Maximized,
    /// Any other raw show command
    Other(u32),
}

/// Placement record of a live window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPlacement {
    pub show_state: ShowState,
    /// Bounds the window has when neither minimized nor maximized.
    /// Tracked by the OS even while the window is maximized.
    pub restored: Rect,
}

/// Error types for window operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("No active window found")]
    NoActiveWindow,
    #[error("Invalid window handle {handle:#x}")]
    InvalidHandle { handle: isize },
    #[error("Failed to query placement for window {handle:#x}")]
    PlacementFailed { handle: isize },
    #[error("Failed to apply layout to window {handle:#x}")]
    ApplyFailed { handle: isize },
}

/// Anything that can report a window placement
pub trait PlacementSource {
    fn placement(&self) -> Result<WindowPlacement, WindowError>;
}

impl<T: PlacementSource + ?Sized> PlacementSource for &T {
    fn placement(&self) -> Result<WindowPlacement, WindowError> {
        (**self).placement()
    }
}
