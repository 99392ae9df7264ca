//! Puzzle input sources

use crate::error::InputError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where one puzzle input is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` names standard input, anything else a file
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(path.to_path_buf())
        }
    }

    /// Name used in output
    pub fn label(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Read the whole input into memory
    pub fn load(&self) -> Result<String, InputError> {
        let read = match self {
            InputSource::Stdin => io::read_to_string(io::stdin()),
            InputSource::File(path) => fs::read_to_string(path),
        };
        read.map_err(|source| InputError::Read {
            label: self.label(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_from_arg() {
        assert_eq!(InputSource::from_arg(Path::new("-")), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg(Path::new("day20.txt")),
            InputSource::File(PathBuf::from("day20.txt"))
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(InputSource::Stdin.label(), "<stdin>");
        assert_eq!(
            InputSource::File(PathBuf::from("tiles/input.txt")).label(),
            "tiles/input.txt"
        );
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Tile 1:\n#.\n.#\n").unwrap();

        let source = InputSource::File(file.path().to_path_buf());
        assert_eq!(source.load().unwrap(), "Tile 1:\n#.\n.#\n");
    }

    #[test]
    fn test_missing_file_names_the_input() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.txt");
        let source = InputSource::File(path.clone());

        let err = source.load().unwrap_err();
        let InputError::Read { label, source } = &err;
        assert_eq!(label, &path.display().to_string());
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("absent.txt"));
    }
}
