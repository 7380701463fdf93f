// ── Safety policy ────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere except:
//   • `platform::win32` – Win32 / WinAPI FFI
// Each unsafe block in that module MUST carry a `// SAFETY:` comment.
#![deny(unsafe_code)]

//! Native child-window hosting.
//!
//! Embeds a foreign native window (a video surface, a legacy control, another
//! process's output) inside a top-level whose layout system knows nothing
//! about native handles.  A [`Host`] per top-level creates [`Attachment`]s;
//! each attachment owns an invisible [`Holder`] window the foreign child is
//! reparented under, and keeps that holder positioned, shown or hidden as
//! layout changes.
//!
//! ```ignore
//! let ctx = rivet_host::platform::win32::context(HostConfig::default())?;
//! let host = Host::new(ctx, Rc::new(Win32TopLevel::new(main_hwnd)));
//! let mut video = host.create_attachment(player_handle)?;
//! video.show_in_bounds(&TransformedBounds::new(slot, Matrix::IDENTITY))?;
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod hosting;
pub mod logging;
pub mod platform;

mod rollback;

pub use config::HostConfig;
pub use error::{HostError, Result};
pub use geometry::{Matrix, Rect, Size, TransformedBounds};
pub use hosting::{Attachment, DestroyableHandle, Holder, Host, HostingContext, ParkingWindow};
pub use platform::{HostKind, NativeHandle, NativeWindowing, PixelRect, TopLevel, WindowId};
