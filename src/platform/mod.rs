// ── Native windowing primitives ───────────────────────────────────────────────
//
// The hosting core never calls an OS API directly.  Everything it needs from
// the windowing system goes through `NativeWindowing`, which the Win32 backend
// implements for real and `recording` implements for tests.
//
// All calls are synchronous and made from the UI thread that owns the message
// loop; implementations are not required to be `Send` or `Sync`.

#[cfg(windows)]
pub mod win32;

#[cfg(test)]
pub(crate) mod recording;

use crate::error::Result;

/// Descriptor carried by Win32 window handles.
pub const HWND_DESCRIPTOR: &str = "HWND";

// ── Handles ───────────────────────────────────────────────────────────────────

/// Opaque window identifier.
///
/// Keeps raw platform handles (e.g. `HWND`) out of the hosting core; the
/// backend converts to and from its own handle type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(usize);

impl WindowId {
    pub const INVALID: WindowId = WindowId(0);

    #[inline]
    pub fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn raw(self) -> usize {
        self.0
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

/// A platform window reference tagged with the kind of handle it is.
///
/// Not owned by the hosting layer unless it is a holder's own window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeHandle {
    pub raw: WindowId,
    pub descriptor: &'static str,
}

impl NativeHandle {
    pub fn new(raw: WindowId, descriptor: &'static str) -> Self {
        Self { raw, descriptor }
    }
}

/// Which windowing implementation a host belongs to.  Attachments can only
/// move between hosts of the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum HostKind {
    /// Real Win32 windows (`platform::win32`).
    Win32,
    /// A windowing layer with no on-screen output.
    Headless,
}

// ── Geometry in device pixels ─────────────────────────────────────────────────

/// A rectangle in device pixels.  Origins may be negative (windows may sit
/// partially or fully off-screen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }
}

// ── Window creation parameters ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowStyle {
    /// `WS_CHILD`: clipped to and moved with its parent.
    Child,
    /// `WS_OVERLAPPEDWINDOW`: a top-level window (created hidden).
    Overlapped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Show,
    Hide,
}

/// Everything `NativeWindowing::create_window` needs.
#[derive(Debug, Clone, Copy)]
pub struct WindowSpec<'a> {
    /// A class previously registered through `register_class`.
    pub class_name: &'a str,
    /// `None` creates a parentless (top-level) window.
    pub parent: Option<WindowId>,
    pub rect: PixelRect,
    pub style: WindowStyle,
    /// Request a layered window, fully opaque.
    pub layered: bool,
}

// ── Capabilities ──────────────────────────────────────────────────────────────

/// The native windowing operations the hosting core relies on.
pub trait NativeWindowing {
    /// The implementation kind, used for host compatibility checks.
    fn kind(&self) -> HostKind;

    /// Descriptor of the handles this implementation understands.
    fn descriptor(&self) -> &'static str;

    /// Register a window class whose procedure forwards every message to the
    /// default handler.
    fn register_class(&self, name: &str) -> Result<()>;

    fn unregister_class(&self, name: &str) -> Result<()>;

    fn create_window(&self, spec: &WindowSpec<'_>) -> Result<WindowId>;

    fn destroy_window(&self, window: WindowId) -> Result<()>;

    /// Make `parent` the native parent of `child`.
    fn set_parent(&self, child: WindowId, parent: WindowId) -> Result<()>;

    fn move_window(&self, window: WindowId, rect: PixelRect, repaint: bool) -> Result<()>;

    /// Move, resize and show or hide `window` without changing its z-order
    /// and without activating it.
    fn set_window_pos(&self, window: WindowId, rect: PixelRect, visibility: Visibility) -> Result<()>;

    /// Request a repaint of the whole client area of `window`.
    fn invalidate(&self, window: WindowId) -> Result<()>;
}

/// The top-level window a host belongs to, as seen by the layout system.
pub trait TopLevel {
    fn handle(&self) -> NativeHandle;

    /// Device pixels per logical unit.
    fn scale_factor(&self) -> f64;
}
