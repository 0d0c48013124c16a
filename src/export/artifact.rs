use crate::common::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File name of the exported deck.
pub const DECK_FILE_NAME: &str = "Acid-Fast-Staining-Showcase.pptx";

/// A serialized deck ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    file_name: String,
    bytes: Vec<u8>,
}

impl Artifact {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Save the artifact into `dir` under its file name and return the path.
    ///
    /// The bytes go to a temporary file in `dir` that is renamed into place
    /// once fully written, so the final name never refers to a partial file.
    pub fn save_in(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        let target = dir.join(&self.file_name);
        let save_error = |reason: String| Error::Save {
            path: target.clone(),
            reason,
        };

        let mut file = NamedTempFile::new_in(dir).map_err(|e| save_error(e.to_string()))?;
        file.write_all(&self.bytes)
            .and_then(|()| file.as_file().sync_all())
            .map_err(|e| save_error(e.to_string()))?;
        file.persist(&target)
            .map_err(|e| save_error(e.error.to_string()))?;

        tracing::info!(path = %target.display(), bytes = self.bytes.len(), "saved deck");
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_in_writes_under_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = Artifact::new(DECK_FILE_NAME, b"PK\x03\x04deck".to_vec());
        let path = artifact.save_in(dir.path()).unwrap();

        assert_eq!(path, dir.path().join(DECK_FILE_NAME));
        assert_eq!(std::fs::read(&path).unwrap(), artifact.bytes());
        // Only the final file remains; the temporary was renamed
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_save_in_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("deck.pptx"), b"old").unwrap();
        Artifact::new("deck.pptx", b"new".to_vec())
            .save_in(dir.path())
            .unwrap();
        assert_eq!(std::fs::read(dir.path().join("deck.pptx")).unwrap(), b"new");
    }

    #[test]
    fn test_save_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = Artifact::new("deck.pptx", vec![1, 2, 3])
            .save_in(&missing)
            .unwrap_err();
        match err {
            Error::Save { path, .. } => assert_eq!(path, missing.join("deck.pptx")),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!missing.exists());
    }
}
