//! Core geometry types
//!
//! Pure types with no knowledge of Win32. The platform layer converts
//! to and from these at the boundary.

/// Rectangle in screen pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Creates a new rectangle
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Creates a rectangle from edge coordinates (Win32 `RECT` form)
    ///
    /// Extents saturate at the `i32` range.
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right.saturating_sub(left), bottom.saturating_sub(top))
    }

    /// Returns the right edge coordinate, saturating at `i32::MAX`
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    /// Returns the bottom edge coordinate, saturating at `i32::MAX`
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }
}
