use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Manifest, Result};

/// A pyblock.toml file with both raw content and parsed manifest.
pub struct PyblockToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl PyblockToml {
    /// Open and parse a pyblock.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        debug!(path = %path.display(), "reading manifest");
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}
