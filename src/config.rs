//! Explicit run configuration, in place of process-wide flag globals.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Where the program text comes from.
#[derive(Debug, Clone)]
pub enum Source {
    /// Read the whole file at the given path into memory.
    File(PathBuf),
    /// Use the inline argument text as-is.
    Inline(String),
}

impl Source {
    /// Load the raw program bytes from this source.
    pub fn read(&self) -> io::Result<Vec<u8>> {
        match self {
            Source::File(path) => fs::read(path),
            Source::Inline(text) => Ok(text.clone().into_bytes()),
        }
    }
}

/// Options for a single interpreter run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Program source selection.
    pub source: Source,
    /// Emit a per-instruction trace line to stderr before each dispatch.
    pub trace: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn inline_source_reads_its_own_bytes() {
        let source = Source::Inline("+++.".to_string());
        assert_eq!(source.read().unwrap(), b"+++.");
    }

    #[test]
    fn file_source_reads_file_contents() {
        let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
        write!(tf, ",[.,]").unwrap();
        let source = Source::File(tf.path().to_path_buf());
        assert_eq!(source.read().unwrap(), b",[.,]");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = Source::File(PathBuf::from("/no/such/file.bf"));
        assert!(source.read().is_err());
    }
}
