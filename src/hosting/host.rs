// ── Host ──────────────────────────────────────────────────────────────────────
//
// One per top-level window.  Creates holders parented under its top-level
// and binds them to foreign children as attachments.  Cloning a `Host` is
// cheap and yields the same host; equality is identity.

use std::rc::Rc;

use crate::{
    error::{HostError, Result},
    logging,
    platform::{HostKind, NativeHandle, TopLevel},
};

use super::{Attachment, Holder, HostingContext};

struct HostInner {
    ctx: Rc<HostingContext>,
    top_level: Rc<dyn TopLevel>,
}

#[derive(Clone)]
pub struct Host {
    inner: Rc<HostInner>,
}

impl Host {
    pub fn new(ctx: Rc<HostingContext>, top_level: Rc<dyn TopLevel>) -> Self {
        Self { inner: Rc::new(HostInner { ctx, top_level }) }
    }

    pub fn kind(&self) -> HostKind {
        self.inner.ctx.platform().kind()
    }

    pub fn top_level(&self) -> &dyn TopLevel {
        self.inner.top_level.as_ref()
    }

    /// True iff `handle` carries the descriptor this host's platform uses.
    pub fn is_compatible(&self, handle: &NativeHandle) -> bool {
        handle.descriptor == self.inner.ctx.platform().descriptor()
    }

    fn ensure_compatible(&self, handle: &NativeHandle) -> Result<()> {
        if self.is_compatible(handle) {
            Ok(())
        } else {
            Err(HostError::IncompatibleHandle { descriptor: handle.descriptor.to_owned() })
        }
    }

    /// A bare holder window under `parent`, for callers that need a native
    /// child but have no window of their own.
    pub fn create_default_child(&self, parent: &NativeHandle) -> Result<Holder> {
        self.ensure_compatible(parent)?;
        Holder::new(self.inner.ctx.clone(), Some(parent.raw))
    }

    /// Create a holder under this host's top-level, let `factory` create the
    /// real child using the holder as its native parent, and attach it.
    ///
    /// If the factory or the attachment fails, every window created here is
    /// destroyed before the error is returned.  A panicking factory unwinds
    /// through the holder's `Drop`, with the same effect.
    pub fn create_attachment_with<F, E>(&self, factory: F) -> Result<Attachment>
    where
        F: FnOnce(NativeHandle) -> std::result::Result<NativeHandle, E>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        use super::DestroyableHandle;

        let mut holder = self.new_holder()?;

        let child = match factory(holder.handle()) {
            Ok(child) => child,
            Err(e) => {
                holder.destroy();
                let err = HostError::Factory(e.into());
                tracing::debug!(target: logging::HOST, error = %err, "attachment factory failed");
                return Err(err);
            }
        };

        self.attach(holder, child)
    }

    /// Adopt an existing native window.
    pub fn create_attachment(&self, child: NativeHandle) -> Result<Attachment> {
        self.ensure_compatible(&child)?;
        let holder = self.new_holder()?;
        self.attach(holder, child)
    }

    fn new_holder(&self) -> Result<Holder> {
        let top = self.inner.top_level.handle().raw;
        Holder::new(self.inner.ctx.clone(), Some(top))
    }

    fn attach(&self, holder: Holder, child: NativeHandle) -> Result<Attachment> {
        // `Attachment::new` destroys the holder itself on failure; after that
        // the attachment owns it and dropping it disposes everything.
        let mut attachment = Attachment::new(self.inner.ctx.clone(), holder, child)?;
        attachment.set_attached_to(Some(self))?;
        tracing::debug!(target: logging::HOST, child = child.raw.raw(), "native control attached");
        Ok(attachment)
    }
}

impl PartialEq for Host {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Host {}

impl std::fmt::Debug for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host")
            .field("kind", &self.kind())
            .field("top_level", &self.inner.top_level.handle())
            .finish()
    }
}
