use crate::error::CheckError;
use crate::markup::Markup;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// The page under test, relative to the working directory
pub const INDEX_HTML: &str = "index.html";

/// The page being validated. Checks only ever read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDocument {
    path: PathBuf,
}

impl TargetDocument {
    /// `index.html` in the current working directory
    pub fn locate() -> Self {
        Self::at(INDEX_HTML)
    }

    pub fn at<P: AsRef<Path>>(path: P) -> Self {
        TargetDocument {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn read(&self) -> Result<String, CheckError> {
        let content = fs::read_to_string(&self.path).map_err(|source| CheckError::Unreadable {
            path: self.path.clone(),
            source,
        })?;
        debug!("read {} bytes from {}", content.len(), self.path.display());
        Ok(content)
    }

    /// Read and parse into a fresh tree
    pub fn parse(&self) -> Result<Markup, CheckError> {
        Ok(Markup::parse(&self.read()?))
    }
}

impl Default for TargetDocument {
    fn default() -> Self {
        Self::locate()
    }
}
