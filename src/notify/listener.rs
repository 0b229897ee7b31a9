//! Listener capability set

/// Receives severity notifications from a [`Notifier`](super::Notifier).
///
/// Every handler defaults to a no-op, so an implementation only overrides the
/// signals it cares about.
pub trait Listener {
    /// Short name used in diagnostic logs
    fn name(&self) -> &str {
        "listener"
    }

    fn on_warning(&self, _message: &str) {}

    fn on_error(&self, _message: &str) {}

    fn on_fatal_error(&self, _message: &str) {}
}
