// ── Offscreen parking window ──────────────────────────────────────────────────
//
// A hidden top-level window that detached holders, and children released by a
// disposed attachment, are reparented under.  It is only ever a reparent
// target: never moved, resized or shown.  Created on first use, never
// destroyed; it lives as long as the UI thread that created it.

use std::{cell::OnceCell, rc::Rc};

use crate::{
    config::HostConfig,
    error::Result,
    logging,
    platform::{NativeWindowing, PixelRect, WindowId, WindowSpec, WindowStyle},
    rollback::Rollback,
};

use super::unique_class_name;

/// Lazily created offscreen parent shared by every holder on the thread.
#[derive(Debug, Default)]
pub struct ParkingWindow {
    handle: OnceCell<WindowId>,
}

thread_local! {
    static SHARED: Rc<ParkingWindow> = Rc::new(ParkingWindow::new());
}

impl ParkingWindow {
    /// A park that creates its window on first use.
    pub fn new() -> Self {
        Self { handle: OnceCell::new() }
    }

    /// A park backed by a window that already exists.  Nothing is created.
    pub fn with_handle(window: WindowId) -> Self {
        let handle = OnceCell::new();
        let _ = handle.set(window);
        Self { handle }
    }

    /// The park shared by every host on the calling (UI) thread.
    pub fn shared() -> Rc<ParkingWindow> {
        SHARED.with(Rc::clone)
    }

    /// The park's window if it has been created.
    pub fn get(&self) -> Option<WindowId> {
        self.handle.get().copied()
    }

    /// Return the park's window, creating it on the first call.
    ///
    /// A failed creation leaves the park uninitialised so a later call can
    /// try again.
    pub fn handle(&self, platform: &dyn NativeWindowing, config: &HostConfig) -> Result<WindowId> {
        if let Some(&id) = self.handle.get() {
            return Ok(id);
        }

        let class_name = unique_class_name(&config.park_class_prefix);
        let mut rollback = Rollback::new();

        platform.register_class(&class_name)?;
        rollback.push("unregister park class", || {
            let _ = platform.unregister_class(&class_name);
        });

        let id = platform.create_window(&WindowSpec {
            class_name: &class_name,
            parent: None,
            rect: PixelRect::default(),
            style: WindowStyle::Overlapped,
            layered: false,
        })?;
        rollback.commit();

        tracing::debug!(target: logging::PARK, window = id.raw(), class = %class_name, "offscreen park created");
        let _ = self.handle.set(id);
        Ok(id)
    }
}
