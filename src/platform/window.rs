//! Window placement queries and layout restore
//!
//! This module handles:
//! - Getting the currently active window
//! - Reading a window's placement record (show state + restored rectangle)
//! - Applying a loaded layout to a freshly created window

use super::windows::{rect_to_win32_rect, show_state_from_raw, win32_rect_to_rect};
use crate::domain::core::Rect;
use crate::domain::layout::WindowLayout;
use crate::domain::placement::{PlacementSource, WindowError, WindowPlacement};
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::*;

fn empty_placement() -> WINDOWPLACEMENT {
    WINDOWPLACEMENT {
        length: std::mem::size_of::<WINDOWPLACEMENT>() as u32,
        ..Default::default()
    }
}

fn check_handle(hwnd: HWND) -> Result<(), WindowError> {
    if unsafe { IsWindow(hwnd) }.as_bool() {
        Ok(())
    } else {
        Err(WindowError::InvalidHandle { handle: hwnd.0 })
    }
}

/// Gets the currently active (foreground) window
///
/// # Returns
/// Handle to the foreground window, or `WindowError::NoActiveWindow` if no
/// window is active
pub fn get_active_window() -> Result<HWND, WindowError> {
    let hwnd = unsafe { GetForegroundWindow() };
    if hwnd.0 == 0 {
        return Err(WindowError::NoActiveWindow);
    }
    Ok(hwnd)
}

impl PlacementSource for HWND {
    fn placement(&self) -> Result<WindowPlacement, WindowError> {
        let hwnd = *self;
        check_handle(hwnd)?;

        let mut placement = empty_placement();
        unsafe { GetWindowPlacement(hwnd, &mut placement) }
            .map_err(|_| WindowError::PlacementFailed { handle: hwnd.0 })?;

        Ok(WindowPlacement {
            show_state: show_state_from_raw(placement.showCmd),
            restored: win32_rect_to_rect(&placement.rcNormalPosition),
        })
    }
}

/// Applies a loaded layout to a window
///
/// The restored rectangle is set even when the window is shown maximized,
/// so un-maximizing returns to the saved geometry. A layout still at the
/// use-default position only gets its show state applied and keeps the
/// position the OS picked at creation.
///
/// # Arguments
/// * `hwnd` - Window to restore
/// * `layout` - Layout returned by `WindowLayoutStore::load`
///
/// # Returns
/// `Ok(())` once the placement is applied, or the `WindowError` describing
/// why the window rejected it
pub fn apply_layout(hwnd: HWND, layout: &WindowLayout) -> Result<(), WindowError> {
    check_handle(hwnd)?;

    let show = if layout.is_maximized {
        SW_SHOWMAXIMIZED
    } else {
        SW_SHOWNORMAL
    };

    if layout.uses_default_position() {
        // Returns the previous visibility, not a status
        let _ = unsafe { ShowWindow(hwnd, show) };
        return Ok(());
    }

    let mut placement = empty_placement();
    unsafe { GetWindowPlacement(hwnd, &mut placement) }
        .map_err(|_| WindowError::PlacementFailed { handle: hwnd.0 })?;

    placement.showCmd = show.0 as u32;
    placement.rcNormalPosition =
        rect_to_win32_rect(&Rect::new(layout.x, layout.y, layout.width, layout.height));

    unsafe { SetWindowPlacement(hwnd, &placement) }
        .map_err(|_| WindowError::ApplyFailed { handle: hwnd.0 })
}
