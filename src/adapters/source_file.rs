use crate::domain::ports::SourceFile;
use crate::utils::error::ImportError;
use std::path::{Path, PathBuf};

/// A file on the local filesystem, read when the importer asks for it.
#[derive(Debug, Clone)]
pub struct LocalFile {
    path: PathBuf,
    name: String,
}

impl LocalFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SourceFile for LocalFile {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, ImportError> {
        Ok(tokio::fs::read(&self.path).await?)
    }
}

/// An uploaded file already held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryFile {
    name: String,
    contents: Vec<u8>,
}

impl InMemoryFile {
    pub fn new(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

impl SourceFile for InMemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, ImportError> {
        Ok(self.contents.clone())
    }
}
