// ── Attachment ────────────────────────────────────────────────────────────────
//
// The live binding between one holder (with the foreign child inside it) and
// a host.  States:
//
//   Attached(host)  holder parented under the host's top-level
//   Detached        holder hidden and parented under the offscreen park
//   Disposed        terminal; every operation except `dispose` fails
//
// Guards run before any native call so released resources are never touched.

use std::rc::Rc;

use crate::{
    error::{HostError, Result},
    geometry::{size_to_pixels, Size, TransformedBounds},
    logging,
    platform::{HostKind, NativeHandle, PixelRect, Visibility},
};

use super::{Holder, Host, HostingContext};

/// Where a hidden holder is moved: outside any sensible client area, 1×1.
const HIDDEN_RECT: PixelRect = PixelRect::new(-100, -100, 1, 1);

struct Live {
    holder: Holder,
    /// Caller-owned; never destroyed here.
    child: Option<NativeHandle>,
    attached_to: Option<Host>,
}

/// One foreign native window embedded through a holder.
pub struct Attachment {
    ctx: Rc<HostingContext>,
    kind: HostKind,
    live: Option<Live>,
}

impl Attachment {
    /// Reparent `child` under `holder` and take ownership of the holder.
    ///
    /// The attachment starts detached; the host sets `attached_to` right after.
    /// If reparenting fails the holder is destroyed before the error returns.
    pub(crate) fn new(ctx: Rc<HostingContext>, mut holder: Holder, child: NativeHandle) -> Result<Self> {
        if let Err(e) = ctx.platform().set_parent(child.raw, holder.window()) {
            holder.dispose();
            return Err(e);
        }

        tracing::debug!(
            target: logging::ATTACHMENT,
            child = child.raw.raw(),
            holder = holder.window().raw(),
            "child reparented under holder"
        );

        let kind = ctx.platform().kind();
        Ok(Self {
            ctx,
            kind,
            live: Some(Live { holder, child: Some(child), attached_to: None }),
        })
    }

    fn live(&self) -> Result<&Live> {
        self.live.as_ref().ok_or(HostError::Disposed)
    }

    /// The host this attachment currently lives in, if any.
    pub fn attached_to(&self) -> Option<&Host> {
        self.live.as_ref().and_then(|l| l.attached_to.as_ref())
    }

    /// Move to `host`, or detach to the offscreen park with `None`.
    ///
    /// Attaching reparents the holder under the host's top-level and leaves
    /// visibility alone.  Detaching hides the holder first.
    pub fn set_attached_to(&mut self, host: Option<&Host>) -> Result<()> {
        let kind = self.kind;
        let live = self.live.as_mut().ok_or(HostError::Disposed)?;
        let platform = self.ctx.platform();
        let holder = live.holder.window();

        match host {
            Some(host) => {
                if !Self::kind_matches(kind, host) {
                    return Err(HostError::IncompatibleHost { expected: kind, found: host.kind() });
                }
                let top = host.top_level().handle().raw;
                platform.set_parent(holder, top)?;
                live.attached_to = Some(host.clone());
                tracing::debug!(target: logging::ATTACHMENT, holder = holder.raw(), top_level = top.raw(), "attached");
            }
            None => {
                let park = self.ctx.park_window()?;
                platform.set_window_pos(holder, HIDDEN_RECT, Visibility::Hide)?;
                platform.set_parent(holder, park)?;
                live.attached_to = None;
                tracing::debug!(target: logging::ATTACHMENT, holder = holder.raw(), "detached to offscreen park");
            }
        }
        Ok(())
    }

    /// True if this attachment can be moved to `host`.
    pub fn is_compatible_with(&self, host: &Host) -> bool {
        Self::kind_matches(self.kind, host)
    }

    fn kind_matches(kind: HostKind, host: &Host) -> bool {
        host.kind() == kind
    }

    /// Hide the holder without changing which host it is attached to.
    pub fn hide(&mut self) -> Result<()> {
        let live = self.live()?;
        self.ctx.platform().set_window_pos(live.holder.window(), HIDDEN_RECT, Visibility::Hide)
    }

    /// Hide, then keep the child sized to `size` so it does not have to
    /// relayout when shown again.
    pub fn hide_with_size(&mut self, size: Size) -> Result<()> {
        self.hide()?;
        let live = self.live()?;
        let (Some(host), Some(child)) = (&live.attached_to, live.child) else {
            return Ok(());
        };
        let (width, height) = size_to_pixels(size, host.top_level().scale_factor());
        self.ctx.platform().move_window(child.raw, PixelRect::new(0, 0, width, height), false)
    }

    /// Show the holder at `bounds` in the host's top-level, with the child
    /// filling it.  Fails with `NotAttached` while detached.
    pub fn show_in_bounds(&mut self, bounds: &TransformedBounds) -> Result<()> {
        let live = self.live()?;
        let host = live.attached_to.as_ref().ok_or(HostError::NotAttached)?;
        let top = host.top_level();
        let rect = bounds.to_pixels(top.scale_factor());
        let platform = self.ctx.platform();

        tracing::trace!(target: logging::ATTACHMENT, ?rect, "show in bounds");

        if let Some(child) = live.child {
            platform.move_window(child.raw, PixelRect::new(0, 0, rect.width, rect.height), true)?;
        }
        platform.set_window_pos(live.holder.window(), rect, Visibility::Show)?;
        platform.invalidate(top.handle().raw)
    }

    /// Hand the child back to the offscreen park and destroy the holder.
    ///
    /// The child itself is caller-owned and survives.  A second call is a
    /// no-op.  Native failures are logged, never returned.
    pub fn dispose(&mut self) {
        let Some(mut live) = self.live.take() else {
            return;
        };

        if let Some(child) = live.child.take() {
            let reparented = self
                .ctx
                .park_window()
                .and_then(|park| self.ctx.platform().set_parent(child.raw, park));
            if let Err(e) = reparented {
                tracing::warn!(target: logging::ATTACHMENT, child = child.raw.raw(), error = %e, "returning child to park failed");
            }
        }
        live.holder.dispose();
        live.attached_to = None;

        tracing::debug!(target: logging::ATTACHMENT, "attachment disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.live.is_none()
    }

    /// The holder's window handle, while live.
    pub fn holder_handle(&self) -> Result<NativeHandle> {
        use super::DestroyableHandle;
        Ok(self.live()?.holder.handle())
    }

    /// The adopted child, while live.
    pub fn child(&self) -> Option<NativeHandle> {
        self.live.as_ref().and_then(|l| l.child)
    }
}

impl Drop for Attachment {
    fn drop(&mut self) {
        // Destroying the holder with the child still inside would destroy
        // the caller's window too.
        self.dispose();
    }
}

impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("kind", &self.kind)
            .field("holder", &self.live.as_ref().map(|l| l.holder.window()))
            .field("child", &self.child())
            .field("attached", &self.attached_to().is_some())
            .finish()
    }
}
