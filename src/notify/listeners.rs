//! Concrete listeners
//!
//! | listener                        | warning | error | fatal          |
//! |---------------------------------|---------|-------|----------------|
//! | [`ConsoleWarningListener`]      | stdout  |   -   |   -            |
//! | [`FileErrorListener`]           |   -     | file  |   -            |
//! | [`ConsoleAndFileFatalListener`] |   -     |   -   | stdout + file  |

use std::io::{Stdout, Write};
use std::path::{Path, PathBuf};

use super::console::Console;
use super::listener::Listener;
use super::sink::{AppendFile, SinkError};
use super::Severity;

/// Prints warnings to the console
pub struct ConsoleWarningListener<W: Write = Stdout> {
    console: Console<W>,
}

impl ConsoleWarningListener {
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }
}

impl Default for ConsoleWarningListener {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleWarningListener<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            console: Console::new(out),
        }
    }
}

impl<W: Write> Listener for ConsoleWarningListener<W> {
    fn name(&self) -> &str {
        "console-warning"
    }

    fn on_warning(&self, message: &str) {
        self.console.write_line(&Severity::Warning.format_line(message));
    }
}

/// Appends errors to a file
#[derive(Debug, Clone)]
pub struct FileErrorListener {
    sink: AppendFile,
}

impl FileErrorListener {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            sink: AppendFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.sink.path()
    }

    /// Append one error line, reporting a failed open or write
    pub fn try_append(&self, message: &str) -> Result<(), SinkError> {
        self.sink.append_line(&Severity::Error.format_line(message))
    }
}

impl Listener for FileErrorListener {
    fn name(&self) -> &str {
        "file-error"
    }

    fn on_error(&self, message: &str) {
        if let Err(e) = self.try_append(message) {
            log::debug!("{}: write skipped: {}", self.name(), e);
        }
    }
}

/// Prints fatal errors to the console and appends them to a file
pub struct ConsoleAndFileFatalListener<W: Write = Stdout> {
    console: Console<W>,
    sink: AppendFile,
}

impl ConsoleAndFileFatalListener {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self::with_writer(path, std::io::stdout())
    }
}

impl<W: Write> ConsoleAndFileFatalListener<W> {
    pub fn with_writer<P: Into<PathBuf>>(path: P, out: W) -> Self {
        Self {
            console: Console::new(out),
            sink: AppendFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.sink.path()
    }

    /// Append one fatal line to the file only
    pub fn try_append(&self, message: &str) -> Result<(), SinkError> {
        self.sink.append_line(&Severity::Fatal.format_line(message))
    }
}

impl<W: Write> Listener for ConsoleAndFileFatalListener<W> {
    fn name(&self) -> &str {
        "console-file-fatal"
    }

    fn on_fatal_error(&self, message: &str) {
        self.console.write_line(&Severity::Fatal.format_line(message));

        if let Err(e) = self.try_append(message) {
            log::debug!("{}: write skipped: {}", self.name(), e);
        }
    }
}
