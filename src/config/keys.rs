//! Registry value names and normal-path defaults
//!
//! The stored schema is exactly these six values. New fields must be added
//! as new value names so older stores keep loading.

pub const X: &str = "WindowX";
pub const Y: &str = "WindowY";
pub const WIDTH: &str = "WindowWidth";
pub const HEIGHT: &str = "WindowHeight";
pub const MAXIMIZED: &str = "WindowMaximized";
pub const FIRST_LAUNCH: &str = "FirstLaunch";

/// Defaults used when a value is missing after the first launch
pub mod defaults {
    pub const X: u32 = 100;
    pub const Y: u32 = 100;
    pub const WIDTH: u32 = 1280;
    pub const HEIGHT: u32 = 720;
    pub const MAXIMIZED: u32 = 0;
    pub const FIRST_LAUNCH: u32 = 1;
}
