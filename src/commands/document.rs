use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A JSON document loaded from disk. Parsing is deferred so the viewer can
/// show a parse error screen instead of refusing to start.
#[derive(Debug)]
pub struct Document {
    pub path: PathBuf,
    pub raw: String,
}

impl Document {
    pub fn read(path: &Path) -> Result<Self, DocumentError> {
        let raw = fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.display().to_string(),
            source,
        })?;
        debug!("read {} bytes from {}", raw.len(), path.display());
        Ok(Self {
            path: path.to_path_buf(),
            raw,
        })
    }

    pub fn parse(&self) -> Result<Value, DocumentError> {
        Ok(serde_json::from_str(&self.raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_a_document_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.json");
        fs::write(&path, r#"{"a": 1}"#).unwrap();

        let document = Document::read(&path).unwrap();
        assert_eq!(document.raw, r#"{"a": 1}"#);
        assert!(document.parse().is_ok());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = Document::read(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, DocumentError::Read { .. }));
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        let document = Document {
            path: PathBuf::from("broken.json"),
            raw: r#"{"a":"#.to_string(),
        };
        assert!(matches!(document.parse().unwrap_err(), DocumentError::Parse(_)));
    }
}
