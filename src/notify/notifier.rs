//! Notifier: synchronous fan-out over a registration table
//!
//! ```text
//!   warning(m) ──► [#0 console-warning] ─► on_warning(m)
//!                  [#1 file-error     ] ─► on_warning(m)  (no-op)
//!                  [#2 <dropped>      ]    skipped
//! ```
//!
//! Registrations hold `Weak` references: the caller keeps the listener alive,
//! and a listener dropped without being removed is skipped on emit.

use std::fmt;
use std::rc::{Rc, Weak};

use super::listener::Listener;
use super::Severity;

/// Handle returned by [`Notifier::add_listener`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct Registration {
    id: ListenerId,
    listener: Weak<dyn Listener>,
}

impl Registration {
    fn points_at<L: Listener>(&self, listener: &Rc<L>) -> bool {
        std::ptr::addr_eq(self.listener.as_ptr(), Rc::as_ptr(listener))
    }
}

/// Fans warnings, errors and fatal errors out to registered listeners
#[derive(Default)]
pub struct Notifier {
    registrations: Vec<Registration>,
    next_id: u64,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` at the end of the table.
    ///
    /// No uniqueness check: registering the same listener twice yields two
    /// callbacks per emit, each under its own id.
    pub fn add_listener<L: Listener + 'static>(&mut self, listener: &Rc<L>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;

        let weak: Weak<L> = Rc::downgrade(listener);
        let weak: Weak<dyn Listener> = weak;
        log::debug!("Registered listener {} ({})", id, listener.name());
        self.registrations.push(Registration { id, listener: weak });
        id
    }

    /// Remove every registration of `listener`, returning how many were removed
    pub fn remove_listener<L: Listener + 'static>(&mut self, listener: &Rc<L>) -> usize {
        let before = self.registrations.len();
        self.registrations.retain(|r| !r.points_at(listener));
        let removed = before - self.registrations.len();

        if removed > 0 {
            log::debug!("Removed {} registration(s) of {}", removed, listener.name());
        }
        removed
    }

    /// Remove the single registration behind `id`
    pub fn remove(&mut self, id: ListenerId) -> bool {
        match self.registrations.iter().position(|r| r.id == id) {
            Some(index) => {
                self.registrations.remove(index);
                log::debug!("Removed listener {}", id);
                true
            }
            None => false,
        }
    }

    /// Drop registrations whose listener no longer exists
    pub fn prune(&mut self) -> usize {
        let before = self.registrations.len();
        self.registrations.retain(|r| r.listener.strong_count() > 0);
        before - self.registrations.len()
    }

    /// Number of registrations, including dropped listeners not yet pruned
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub fn warning(&self, message: &str) {
        self.emit(Severity::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.emit(Severity::Error, message);
    }

    pub fn fatal_error(&self, message: &str) {
        self.emit(Severity::Fatal, message);
    }

    /// Invoke the handler matching `severity` on every live listener, in
    /// registration order.
    pub fn emit(&self, severity: Severity, message: &str) {
        log::trace!("Emitting {:?} to {} registration(s)", severity, self.registrations.len());

        for registration in &self.registrations {
            let Some(listener) = registration.listener.upgrade() else {
                log::trace!("Skipping dropped listener {}", registration.id);
                continue;
            };

            match severity {
                Severity::Warning => listener.on_warning(message),
                Severity::Error => listener.on_error(message),
                Severity::Fatal => listener.on_fatal_error(message),
            }
        }
    }
}
