// ── Construction rollback ─────────────────────────────────────────────────────
//
// Native resources acquired during construction have no owner until the
// constructed object exists.  Each acquisition pushes its undo step here; if
// construction bails out early the guard runs the steps newest-first.

use crate::logging;

type Undo<'a> = Box<dyn FnOnce() + 'a>;

/// Undo steps for a construction in progress.
///
/// Dropping the guard unwinds every step in reverse order.  Call
/// [`Rollback::commit`] once the constructed value owns the resources.
pub(crate) struct Rollback<'a> {
    steps: Vec<(&'static str, Undo<'a>)>,
}

impl<'a> Rollback<'a> {
    pub(crate) fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Record how to release the resource just acquired.
    pub(crate) fn push(&mut self, label: &'static str, undo: impl FnOnce() + 'a) {
        self.steps.push((label, Box::new(undo)));
    }

    /// Keep everything acquired so far.
    pub(crate) fn commit(mut self) {
        self.steps.clear();
    }
}

impl Drop for Rollback<'_> {
    fn drop(&mut self) {
        while let Some((label, undo)) = self.steps.pop() {
            tracing::debug!(target: logging::ROLLBACK, step = label, "rolling back");
            undo();
        }
    }
}
