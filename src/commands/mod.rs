//! CLI subcommands

use std::rc::Rc;

use crate::config::Config;
use crate::notify::{ConsoleAndFileFatalListener, ConsoleWarningListener, FileErrorListener, Notifier};

pub mod completions;
pub mod config;
pub mod demo;
pub mod emit;

/// The default listener set: console warnings, file errors, console+file fatals.
///
/// The notifier only holds weak references, so the listeners live here for as
/// long as the wiring does.
pub struct Wiring {
    pub notifier: Notifier,
    _warning: Rc<ConsoleWarningListener>,
    _error: Rc<FileErrorListener>,
    _fatal: Rc<ConsoleAndFileFatalListener>,
}

impl Wiring {
    pub fn from_config(config: &Config) -> Self {
        let warning = Rc::new(ConsoleWarningListener::new());
        let error = Rc::new(FileErrorListener::new(config.error_log()));
        let fatal = Rc::new(ConsoleAndFileFatalListener::new(config.fatal_log()));

        let mut notifier = Notifier::new();
        notifier.add_listener(&warning);
        notifier.add_listener(&error);
        notifier.add_listener(&fatal);

        log::info!(
            "Wired {} listeners (errors -> {}, fatal -> {})",
            notifier.len(),
            error.path().display(),
            fatal.path().display()
        );

        Self {
            notifier,
            _warning: warning,
            _error: error,
            _fatal: fatal,
        }
    }
}
