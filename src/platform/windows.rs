//! General Windows platform utilities
//!
//! Win32 conversions that don't fit into the more specialized platform
//! modules.

use crate::domain::core::Rect;
use crate::domain::placement::ShowState;
use windows::Win32::Foundation::RECT;
use windows::Win32::UI::WindowsAndMessaging::{SW_SHOWMAXIMIZED, SW_SHOWMINIMIZED, SW_SHOWNORMAL};

/// Encodes a string as a null-terminated UTF-16 buffer for `PCWSTR` arguments
///
/// # Arguments
/// * `value` - String to encode
///
/// # Returns
/// UTF-16 code units followed by a terminating zero. The buffer must outlive
/// any `PCWSTR` built from it.
pub fn to_wide(value: &str) -> Vec<u16> {
    value.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Converts a domain rectangle to Windows RECT structure
///
/// # Arguments
/// * `rect` - Domain rectangle to convert
///
/// # Returns
/// Windows RECT structure, with edges saturated at `i32::MAX`
pub fn rect_to_win32_rect(rect: &Rect) -> RECT {
    RECT {
        left: rect.x,
        top: rect.y,
        right: rect.right(),
        bottom: rect.bottom(),
    }
}

/// Converts a Windows RECT to domain rectangle
///
/// # Arguments
/// * `rect` - Windows RECT structure
///
/// # Returns
/// Domain rectangle
pub fn win32_rect_to_rect(rect: &RECT) -> Rect {
    Rect::from_edges(rect.left, rect.top, rect.right, rect.bottom)
}

/// Maps the raw `showCmd` of a `WINDOWPLACEMENT` to a show state
pub fn show_state_from_raw(show_cmd: u32) -> ShowState {
    if show_cmd == SW_SHOWMAXIMIZED.0 as u32 {
        ShowState::Maximized
    } else if show_cmd == SW_SHOWMINIMIZED.0 as u32 {
        ShowState::Minimized
    } else if show_cmd == SW_SHOWNORMAL.0 as u32 {
        ShowState::Normal
    } else {
        ShowState::Other(show_cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_strings_are_null_terminated() {
        let wide = to_wide("WindowX");
        assert_eq!(wide.len(), 8);
        assert_eq!(wide.last(), Some(&0));
        assert_eq!(String::from_utf16_lossy(&wide[..7]), "WindowX");
    }

    #[test]
    fn rect_conversion_round_trips() {
        let rect = Rect::new(-1280, 10, 1280, 1000);
        let win32 = rect_to_win32_rect(&rect);
        assert_eq!((win32.left, win32.top, win32.right, win32.bottom), (-1280, 10, 0, 1010));
        assert_eq!(win32_rect_to_rect(&win32), rect);
    }

    #[test]
    fn extreme_loaded_coordinates_convert_without_overflow() {
        let rect = Rect::new(0x7FFF_FFF0, 0x7FFF_FFF0, 1280, 720);
        let win32 = rect_to_win32_rect(&rect);
        assert_eq!((win32.left, win32.top), (0x7FFF_FFF0, 0x7FFF_FFF0));
        assert_eq!((win32.right, win32.bottom), (i32::MAX, i32::MAX));
    }

    #[test]
    fn show_states_from_raw_commands() {
        assert_eq!(show_state_from_raw(3), ShowState::Maximized);
        assert_eq!(show_state_from_raw(2), ShowState::Minimized);
        assert_eq!(show_state_from_raw(1), ShowState::Normal);
        assert_eq!(show_state_from_raw(9), ShowState::Other(9));
    }
}
