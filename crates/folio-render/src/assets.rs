//! Asset lookup for photos, videos, figures and PDFs.
//!
//! Record paths are relative to the asset root. Anything that tries to leave
//! the root (absolute paths, `..`) is treated as missing.

use std::io;
use std::path::{Component, Path, PathBuf};

/// URL prefix the web server mounts the asset directory under.
pub const ASSET_URL_PREFIX: &str = "/assets";

pub trait AssetStore: Send + Sync {
    /// Whether `path` names an existing file.
    fn exists(&self, path: &Path) -> bool;

    /// Read the whole file.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// URL under which the browser can fetch `path`.
    fn public_url(&self, path: &Path) -> String {
        let segments: Vec<String> = normalise(path)
            .map(|p| {
                p.components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        format!("{}/{}", ASSET_URL_PREFIX, segments.join("/"))
    }
}

/// Strip `.` components and reject anything that is not a plain relative path.
pub fn normalise(path: &Path) -> Option<PathBuf> {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    if out.as_os_str().is_empty() { None } else { Some(out) }
}

/// Assets stored on the local filesystem under `root`.
#[derive(Debug, Clone)]
pub struct FsAssets {
    root: PathBuf,
}

impl FsAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> Option<PathBuf> {
        normalise(path).map(|rel| self.root.join(rel))
    }
}

impl AssetStore for FsAssets {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).is_some_and(|p| p.is_file())
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        match self.resolve(path) {
            Some(full) => std::fs::read(full),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is outside the asset directory", path.display()),
            )),
        }
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryAssets {
    files: std::collections::HashMap<PathBuf, Vec<u8>>,
    locked: std::collections::HashSet<PathBuf>,
}

#[cfg(test)]
impl MemoryAssets {
    pub(crate) fn with(mut self, path: &str, bytes: &[u8]) -> Self {
        self.files.insert(PathBuf::from(path), bytes.to_vec());
        self
    }

    /// A file that exists but cannot be read.
    pub(crate) fn locked(mut self, path: &str) -> Self {
        self.locked.insert(PathBuf::from(path));
        self
    }
}

#[cfg(test)]
impl AssetStore for MemoryAssets {
    fn exists(&self, path: &Path) -> bool {
        normalise(path).is_some_and(|p| self.files.contains_key(&p) || self.locked.contains(&p))
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        if normalise(path).is_some_and(|p| self.locked.contains(&p)) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, path.display().to_string()));
        }
        normalise(path)
            .and_then(|p| self.files.get(&p).cloned())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }
}
