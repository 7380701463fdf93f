// ── Holder window ─────────────────────────────────────────────────────────────
//
// An invisible child window whose only job is to be a stable parent for a
// foreign native window.  Each holder registers its own window class (with a
// procedure that forwards everything to the default handler) and creates one
// window of that class.
//
// Ownership: the class registration and the window belong to the holder and
// are released together, exactly once, by `dispose`, or by `Drop` if
// `dispose` never ran.

use std::rc::Rc;

use crate::{
    error::Result,
    logging,
    platform::{NativeHandle, PixelRect, WindowId, WindowSpec, WindowStyle},
    rollback::Rollback,
};

use super::{unique_class_name, HostingContext};

/// A native handle the caller may destroy explicitly.
pub trait DestroyableHandle {
    fn handle(&self) -> NativeHandle;

    fn destroy(&mut self);
}

/// Invisible proxy window a foreign native child is reparented under.
pub struct Holder {
    ctx: Rc<HostingContext>,
    window: WindowId,
    class_name: String,
    released: bool,
}

impl Holder {
    /// Register a fresh class and create the holder window under `parent`,
    /// or under the offscreen park when `parent` is `None`.
    ///
    /// On failure nothing created here survives.
    pub fn new(ctx: Rc<HostingContext>, parent: Option<WindowId>) -> Result<Self> {
        let parent = match parent {
            Some(p) => p,
            None => ctx.park_window()?,
        };

        let platform = ctx.platform();
        let config = ctx.config();
        let class_name = unique_class_name(&config.class_prefix);
        let mut rollback = Rollback::new();

        platform.register_class(&class_name)?;
        rollback.push("unregister holder class", || {
            let _ = platform.unregister_class(&class_name);
        });

        let (width, height) = config.holder_size;
        let window = platform.create_window(&WindowSpec {
            class_name: &class_name,
            parent: Some(parent),
            rect: PixelRect::new(0, 0, width, height),
            style: WindowStyle::Child,
            layered: config.layered_holders,
        })?;
        rollback.commit();

        tracing::debug!(
            target: logging::HOLDER,
            window = window.raw(),
            parent = parent.raw(),
            class = %class_name,
            "holder created"
        );

        Ok(Self { ctx, window, class_name, released: false })
    }

    /// The holder's own window.
    pub fn window(&self) -> WindowId {
        self.window
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Destroy the window, then unregister the class.  Safe to call more
    /// than once; only the first call touches native state.
    pub fn dispose(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        let platform = self.ctx.platform();
        if let Err(e) = platform.destroy_window(self.window) {
            tracing::warn!(target: logging::HOLDER, window = self.window.raw(), error = %e, "destroying holder window failed");
        }
        if let Err(e) = platform.unregister_class(&self.class_name) {
            tracing::warn!(target: logging::HOLDER, class = %self.class_name, error = %e, "unregistering holder class failed");
        }

        tracing::debug!(target: logging::HOLDER, window = self.window.raw(), "holder destroyed");
    }

    pub fn is_disposed(&self) -> bool {
        self.released
    }
}

impl DestroyableHandle for Holder {
    fn handle(&self) -> NativeHandle {
        NativeHandle::new(self.window, self.ctx.platform().descriptor())
    }

    fn destroy(&mut self) {
        self.dispose();
    }
}

impl Drop for Holder {
    fn drop(&mut self) {
        if !self.released {
            tracing::trace!(target: logging::HOLDER, window = self.window.raw(), "holder released on drop");
            self.dispose();
        }
    }
}

impl std::fmt::Debug for Holder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Holder")
            .field("window", &self.window)
            .field("class_name", &self.class_name)
            .field("released", &self.released)
            .finish()
    }
}
