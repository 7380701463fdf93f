#![allow(unsafe_code)]

use windows::Win32::{Foundation::HWND, UI::HiDpi::GetDpiForWindow};

pub(crate) const BASE_DPI: u32 = 96;

/// Return the DPI for `hwnd`. Falls back to BASE_DPI (96) on failure.
pub(crate) fn get_for_window(hwnd: HWND) -> u32 {
    // SAFETY: hwnd is a valid window handle provided by the caller; an
    // invalid handle makes GetDpiForWindow return 0, handled below.
    let v = unsafe { GetDpiForWindow(hwnd) };
    if v == 0 {
        BASE_DPI
    } else {
        v
    }
}

/// Device pixels per logical unit for `hwnd`.
pub(crate) fn scale_factor(hwnd: HWND) -> f64 {
    f64::from(get_for_window(hwnd)) / f64::from(BASE_DPI)
}
