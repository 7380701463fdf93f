// ── Win32 windowing backend ───────────────────────────────────────────────────
//
// Responsibilities in this file (unsafe confined here):
//   • Register / unregister per-holder window classes with a forwarding
//     window procedure.
//   • Create and destroy holder and park windows.
//   • Reparent, move, show/hide and invalidate windows.
//   • Wrap a top-level HWND as a `TopLevel` with its DPI scale.

#![allow(unsafe_code)]

use std::ffi::c_void;

use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::{BOOL, COLORREF, HINSTANCE, HWND, LPARAM, LRESULT, WPARAM},
        Graphics::Gdi::InvalidateRect,
        System::LibraryLoader::GetModuleHandleW,
        UI::WindowsAndMessaging::{
            CreateWindowExW, DefWindowProcW, DestroyWindow, MoveWindow, RegisterClassExW,
            SetLayeredWindowAttributes, SetParent, SetWindowPos, UnregisterClassW, CW_USEDEFAULT,
            HMENU, LWA_ALPHA, SET_WINDOW_POS_FLAGS, SWP_HIDEWINDOW, SWP_NOACTIVATE, SWP_NOZORDER,
            SWP_SHOWWINDOW, WINDOW_EX_STYLE, WNDCLASSEXW, WS_CHILD, WS_EX_LAYERED,
            WS_OVERLAPPEDWINDOW,
        },
    },
};

use super::dpi;
use crate::{
    error::{HostError, Result},
    platform::{
        HostKind, NativeHandle, NativeWindowing, PixelRect, TopLevel, Visibility, WindowId,
        WindowSpec, WindowStyle, HWND_DESCRIPTOR,
    },
};

// ── Handle conversion ─────────────────────────────────────────────────────────

fn hwnd(id: WindowId) -> HWND {
    HWND(id.raw() as *mut c_void)
}

fn window_id(hwnd: HWND) -> WindowId {
    WindowId::from_raw(hwnd.0 as usize)
}

fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Wrap a windows-crate error, keeping the name of the failing function.
fn failed(function: &'static str) -> impl FnOnce(windows::core::Error) -> HostError {
    move |e| HostError::Native { function, code: e.code().0 as u32 }
}

// ── Windowing ─────────────────────────────────────────────────────────────────

/// `NativeWindowing` over user32.  Must be used from the thread that runs
/// the message loop for the windows it touches.
pub struct Win32Windowing {
    hinstance: HINSTANCE,
}

impl Win32Windowing {
    pub fn new() -> Result<Self> {
        // SAFETY: GetModuleHandleW(None) returns the .exe's own HMODULE, which is
        // valid for the process lifetime.
        let hmodule = unsafe { GetModuleHandleW(None) }.map_err(failed("GetModuleHandleW"))?;
        Ok(Self { hinstance: HINSTANCE(hmodule.0) })
    }
}

impl NativeWindowing for Win32Windowing {
    fn kind(&self) -> HostKind {
        HostKind::Win32
    }

    fn descriptor(&self) -> &'static str {
        HWND_DESCRIPTOR
    }

    fn register_class(&self, name: &str) -> Result<()> {
        let class_wide = wide(name);
        let wndclass = WNDCLASSEXW {
            // WNDCLASSEXW is ~80 bytes; the cast to u32 is always lossless.
            cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
            lpfnWndProc: Some(forwarding_wnd_proc),
            hInstance: self.hinstance,
            lpszClassName: PCWSTR(class_wide.as_ptr()),
            ..Default::default()
        };

        // SAFETY: wndclass is fully initialised; class_wide is a valid
        // null-terminated UTF-16 string that outlives the call (the system
        // copies the name).
        let atom = unsafe { RegisterClassExW(&wndclass) };
        if atom == 0 {
            return Err(failed("RegisterClassExW")(windows::core::Error::from_win32()));
        }
        Ok(())
    }

    fn unregister_class(&self, name: &str) -> Result<()> {
        let class_wide = wide(name);
        // SAFETY: class_wide is null-terminated UTF-16; every window of the
        // class has been destroyed by the caller.
        unsafe { UnregisterClassW(PCWSTR(class_wide.as_ptr()), self.hinstance) }
            .map_err(failed("UnregisterClassW"))
    }

    fn create_window(&self, spec: &WindowSpec<'_>) -> Result<WindowId> {
        let class_wide = wide(spec.class_name);
        let ex_style = if spec.layered { WS_EX_LAYERED } else { WINDOW_EX_STYLE(0) };
        let (style, x, y, w, h) = match spec.style {
            WindowStyle::Child => (WS_CHILD, spec.rect.x, spec.rect.y, spec.rect.width, spec.rect.height),
            WindowStyle::Overlapped => {
                (WS_OVERLAPPEDWINDOW, CW_USEDEFAULT, CW_USEDEFAULT, CW_USEDEFAULT, CW_USEDEFAULT)
            }
        };
        let parent = spec.parent.map(hwnd).unwrap_or_default();

        // SAFETY: the class was registered by `register_class` with this
        // hinstance; parent is either null (top-level) or a live window owned
        // by this thread.  Styles never include WS_VISIBLE, so the window is
        // created hidden.
        let created = unsafe {
            CreateWindowExW(
                ex_style,
                PCWSTR(class_wide.as_ptr()),
                PCWSTR::null(),
                style,
                x,
                y,
                w,
                h,
                parent,
                HMENU::default(),
                self.hinstance,
                None,
            )
        }
        .map_err(failed("CreateWindowExW"))?;

        if spec.layered {
            // SAFETY: created is the layered window we just made.
            let opaque = unsafe { SetLayeredWindowAttributes(created, COLORREF(0), 255, LWA_ALPHA) };
            if let Err(e) = opaque {
                // SAFETY: created is live and owned by us; no one else has it yet.
                unsafe {
                    let _ = DestroyWindow(created);
                }
                return Err(failed("SetLayeredWindowAttributes")(e));
            }
        }

        Ok(window_id(created))
    }

    fn destroy_window(&self, window: WindowId) -> Result<()> {
        // SAFETY: window belongs to this thread; DestroyWindow on a child
        // sends WM_DESTROY to it and its descendants only.
        unsafe { DestroyWindow(hwnd(window)) }.map_err(failed("DestroyWindow"))
    }

    fn set_parent(&self, child: WindowId, parent: WindowId) -> Result<()> {
        // SAFETY: both handles refer to windows the caller keeps alive for the
        // duration of the call.  The previous parent is not needed.
        unsafe { SetParent(hwnd(child), hwnd(parent)) }
            .map(|_| ())
            .map_err(failed("SetParent"))
    }

    fn move_window(&self, window: WindowId, rect: PixelRect, repaint: bool) -> Result<()> {
        // SAFETY: window is a valid handle provided by the caller.
        unsafe { MoveWindow(hwnd(window), rect.x, rect.y, rect.width, rect.height, BOOL::from(repaint)) }
            .map_err(failed("MoveWindow"))
    }

    fn set_window_pos(&self, window: WindowId, rect: PixelRect, visibility: Visibility) -> Result<()> {
        let show = match visibility {
            Visibility::Show => SWP_SHOWWINDOW,
            Visibility::Hide => SWP_HIDEWINDOW,
        };
        let flags: SET_WINDOW_POS_FLAGS = show | SWP_NOZORDER | SWP_NOACTIVATE;
        // SAFETY: window is a valid handle; SWP_NOZORDER makes the insert-after
        // handle irrelevant, so null is passed.
        unsafe {
            SetWindowPos(hwnd(window), HWND::default(), rect.x, rect.y, rect.width, rect.height, flags)
        }
        .map_err(failed("SetWindowPos"))
    }

    fn invalidate(&self, window: WindowId) -> Result<()> {
        // SAFETY: window is a valid handle; a null rect invalidates the whole
        // client area.  The return value only reports an invalid handle.
        let ok = unsafe { InvalidateRect(hwnd(window), None, BOOL::from(false)) };
        if ok.as_bool() {
            Ok(())
        } else {
            Err(HostError::Native { function: "InvalidateRect", code: 0 })
        }
    }
}

// ── Window procedure ──────────────────────────────────────────────────────────

// SAFETY: registered as lpfnWndProc for every holder and park class.  Windows
// guarantees the arguments are valid for the duration of the call.  Holders
// render nothing and intercept nothing.
unsafe extern "system" fn forwarding_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    DefWindowProcW(hwnd, msg, wparam, lparam)
}

// ── Top-level wrapper ─────────────────────────────────────────────────────────

/// A top-level `HWND` as seen by a host.
#[derive(Debug, Clone, Copy)]
pub struct Win32TopLevel {
    hwnd: HWND,
}

impl Win32TopLevel {
    /// `hwnd` must stay a live top-level window for as long as any host
    /// built on it is in use.
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    pub fn from_handle(handle: &NativeHandle) -> Result<Self> {
        if handle.descriptor != HWND_DESCRIPTOR {
            return Err(HostError::IncompatibleHandle { descriptor: handle.descriptor.to_owned() });
        }
        Ok(Self::new(hwnd(handle.raw)))
    }
}

impl TopLevel for Win32TopLevel {
    fn handle(&self) -> NativeHandle {
        NativeHandle::new(window_id(self.hwnd), HWND_DESCRIPTOR)
    }

    fn scale_factor(&self) -> f64 {
        dpi::scale_factor(self.hwnd)
    }
}
