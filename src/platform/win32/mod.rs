// ── Win32 platform implementation ─────────────────────────────────────────────
//
// The only module in the crate where `unsafe` code is permitted.  Every
// `unsafe` block MUST carry a `// SAFETY:` comment that states:
//   • which invariant makes the operation sound, and
//   • what the caller is responsible for maintaining.
//
// Nothing in this module is `pub` beyond what callers genuinely need; keep the
// unsafe surface as small as possible.

#![allow(unsafe_code)]

// ── Sub-modules ───────────────────────────────────────────────────────────────

pub mod window; // NativeWindowing over user32, top-level wrapper

pub(crate) mod dpi; // per-window DPI → scale factor

pub use window::{Win32TopLevel, Win32Windowing};

use std::rc::Rc;

use crate::{
    config::HostConfig,
    error::Result,
    hosting::{HostingContext, ParkingWindow},
};

/// A hosting context backed by real Win32 windows and the thread's shared
/// offscreen park.  Call on the UI thread.
pub fn context(config: HostConfig) -> Result<Rc<HostingContext>> {
    let platform = Rc::new(Win32Windowing::new()?);
    Ok(HostingContext::new(platform, ParkingWindow::shared(), config))
}
