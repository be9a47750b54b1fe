//! Window layout value type
//!
//! A `WindowLayout` is the geometry a host applies to its main window at
//! startup and snapshots at shutdown. It is always constructed fresh by the
//! store; callers own it and decide when to apply or persist it.

/// Position sentinel meaning "let the OS choose"
///
/// Same value as Win32 `CW_USEDEFAULT`.
pub const USE_DEFAULT_POSITION: i32 = i32::MIN;

/// Restored width used when nothing else is known
pub const DEFAULT_WIDTH: i32 = 1280;

/// Restored height used when nothing else is known
pub const DEFAULT_HEIGHT: i32 = 720;

/// Restored geometry and show state of a window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowLayout {
    /// Left edge of the restored (non-maximized) window
    pub x: i32,
    /// Top edge of the restored (non-maximized) window
    pub y: i32,
    /// Width of the restored window
    pub width: i32,
    /// Height of the restored window
    pub height: i32,
    /// Whether the window is, or should be shown, maximized
    pub is_maximized: bool,
    /// True only on the very first run for this user
    pub is_first_launch: bool,
}

impl Default for WindowLayout {
    fn default() -> Self {
        Self {
            x: USE_DEFAULT_POSITION,
            y: USE_DEFAULT_POSITION,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            is_maximized: false,
            is_first_launch: true,
        }
    }
}

impl WindowLayout {
    /// Returns true if either coordinate is the OS-chooses sentinel
    pub fn uses_default_position(&self) -> bool {
        self.x == USE_DEFAULT_POSITION || self.y == USE_DEFAULT_POSITION
    }

    /// Compares everything except the first-launch flag
    #[cfg(test)]
    pub fn same_geometry(&self, other: &WindowLayout) -> bool {
        self.x == other.x
            && self.y == other.y
            && self.width == other.width
            && self.height == other.height
            && self.is_maximized == other.is_maximized
    }
}
