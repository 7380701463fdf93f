// ── Log targets ───────────────────────────────────────────────────────────────
//
// Rivet Host logs through `tracing` and never installs a subscriber.  These
// targets let an application filter native-window traffic, e.g.
// `RUST_LOG=rivet_host::holder=debug`.

/// Holder window and class lifecycle.
pub const HOLDER: &str = "rivet_host::holder";
/// Attachment reparenting, visibility and geometry.
pub const ATTACHMENT: &str = "rivet_host::attachment";
/// Host factory operations.
pub const HOST: &str = "rivet_host::host";
/// Offscreen parking window.
pub const PARK: &str = "rivet_host::park";
/// Construction rollback.
pub const ROLLBACK: &str = "rivet_host::rollback";
