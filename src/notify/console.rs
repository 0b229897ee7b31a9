//! Console sink

use std::cell::RefCell;
use std::io::{Stdout, Write};

/// Line-oriented console writer.
///
/// Writes are best effort: a failing stdout is ignored, the line terminator is
/// always followed by a flush.
pub struct Console<W: Write = Stdout> {
    out: RefCell<W>,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out: RefCell::new(out) }
    }

    pub fn write_line(&self, line: &str) {
        let mut out = self.out.borrow_mut();
        let _ = writeln!(out, "{}", line);
        let _ = out.flush();
    }
}

/// In-memory writer that can be cloned into several consoles and read back
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(std::rc::Rc<RefCell<Vec<u8>>>);

#[cfg(test)]
impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).to_string()
    }
}

#[cfg(test)]
impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_write_line_appends_terminator() {
        let buffer = SharedBuffer::default();
        let console = Console::new(buffer.clone());

        console.write_line("one");
        console.write_line("two");

        assert_eq!(buffer.contents(), "one\ntwo\n");
    }

    #[test]
    fn test_write_failure_is_ignored() {
        let console = Console::new(Broken);
        // Should not panic
        console.write_line("lost");
    }
}
