use super::ContactSink;
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Writes dumps to a plain text file, one contact per line.
///
/// Every dump truncates the file first. The handle only lives for the
/// duration of [`ContactSink::write_lines`].
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContactSink for FileSink {
    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        for line in lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgendaError;
    use std::fs;

    #[test]
    fn writes_one_line_per_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.txt");
        let mut sink = FileSink::new(&path);

        sink.write_lines(&["a b c d".to_string(), "e f g h".to_string()])
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a b c d\ne f g h\n");
    }

    #[test]
    fn truncates_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.txt");
        fs::write(&path, "old line that is quite long\nanother\n").unwrap();

        let mut sink = FileSink::new(&path);
        sink.write_lines(&["new".to_string()]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");

        sink.write_lines(&[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("contacts.txt");
        let mut sink = FileSink::new(&path);

        let err = sink.write_lines(&["x".to_string()]).unwrap_err();
        assert!(matches!(err, AgendaError::Io(_)));
        assert!(!path.exists());
    }

    #[test]
    fn location_is_the_path() {
        let sink = FileSink::new("out/contacts.txt");
        assert_eq!(sink.location(), PathBuf::from("out/contacts.txt").display().to_string());
    }
}
