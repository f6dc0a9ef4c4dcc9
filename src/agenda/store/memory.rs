use super::ContactSink;
use crate::error::Result;
use std::io;

/// In-memory sink for testing.
/// Keeps the lines of the most recent dump.
#[derive(Default)]
pub struct MemorySink {
    lines: Vec<String>,
    dumps: usize,
    fail: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose writes always fail, to exercise the I/O error path.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// How many dumps completed.
    pub fn dumps(&self) -> usize {
        self.dumps
    }
}

impl ContactSink for MemorySink {
    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "sink is read-only").into());
        }
        self.lines = lines.to_vec();
        self.dumps += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
