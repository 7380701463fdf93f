// ── Native control hosting ────────────────────────────────────────────────────
//
// Embeds foreign native windows in a top-level the layout system manages.
//
//   Host        one per top-level; factory for attachments.
//   Holder      invisible proxy window the foreign child is reparented under.
//   Attachment  binds one holder (and its child) to a host; owns the holder.
//
// The foreign child's native parent is always its holder.  Moving between
// hosts, or to the offscreen park, only ever reparents the holder.
//
// Everything here runs on the UI thread; types are `!Send` on purpose via `Rc`.

mod attachment;
mod holder;
mod host;
mod park;

pub use attachment::Attachment;
pub use holder::{DestroyableHandle, Holder};
pub use host::Host;
pub use park::ParkingWindow;

use std::{
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{config::HostConfig, error::Result, platform::{NativeWindowing, WindowId}};

/// Shared state injected into every holder and host.
pub struct HostingContext {
    pub(crate) platform: Rc<dyn NativeWindowing>,
    pub(crate) park: Rc<ParkingWindow>,
    pub(crate) config: HostConfig,
}

impl HostingContext {
    pub fn new(platform: Rc<dyn NativeWindowing>, park: Rc<ParkingWindow>, config: HostConfig) -> Rc<Self> {
        Rc::new(Self { platform, park, config })
    }

    pub fn platform(&self) -> &dyn NativeWindowing {
        self.platform.as_ref()
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// The offscreen park's window, created on first use.
    pub fn park_window(&self) -> Result<WindowId> {
        self.park.handle(self.platform.as_ref(), &self.config)
    }
}

/// Window-class name unique within the process.
pub(crate) fn unique_class_name(prefix: &str) -> String {
    static NEXT: AtomicU64 = AtomicU64::new(1);
    let n = NEXT.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{:x}-{n}", std::process::id())
}
