//! Resolution of user-supplied variable paths into readable files.
//!
//! A path is looked up on the local filesystem first, then in the
//! [`ResourceNamespace`]. The result is a [`Discovery`]: the files found, in
//! name order, plus the mount needed to read them.

use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::loader::archive::{ArchiveLoader, ArchiveMount};
use crate::loader::interface::SourceLoader;
use crate::loader::local::LocalLoader;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

pub mod archive;
pub mod interface;
pub mod local;
pub mod resources;

pub use resources::{ResourceNamespace, ResourceRoot};

/// Where a resolved source lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scheme {
    /// Local filesystem path
    Local(PathBuf),
    /// Path inside a resource directory shipped with the program
    Packaged(PathBuf),
    /// Member of a zip resource archive
    Archived { archive: PathBuf, member: String },
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scheme::Local(path) => write!(f, "local path: '{}'", path.display()),
            Scheme::Packaged(path) => write!(f, "packaged resource: '{}'", path.display()),
            Scheme::Archived { archive, member } => {
                write!(f, "archived resource: '{}!/{member}'", archive.display())
            }
        }
    }
}

/// A resolved reference to one user-supplied path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocator {
    pub scheme: Scheme,
    pub is_dir: bool,
}

impl SourceLocator {
    pub fn new(scheme: Scheme, is_dir: bool) -> Self {
        Self { scheme, is_dir }
    }

    /// Picks the loader able to enumerate this location.
    fn loader(&self) -> Box<dyn SourceLoader + '_> {
        match &self.scheme {
            Scheme::Local(path) | Scheme::Packaged(path) => {
                Box::new(LocalLoader::new(path.as_path(), self.is_dir))
            }
            Scheme::Archived { archive, member } => {
                Box::new(ArchiveLoader::new(archive.clone(), member.clone(), self.is_dir))
            }
        }
    }
}

impl std::fmt::Display for SourceLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.is_dir { "directory" } else { "file" };
        write!(f, "{kind} at {}", self.scheme)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileLocation {
    Path(PathBuf),
    Member(String),
}

impl std::fmt::Display for FileLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileLocation::Path(path) => write!(f, "{}", path.display()),
            FileLocation::Member(member) => write!(f, "{member}"),
        }
    }
}

/// A leaf file found under a source location. Opening it goes through the owning [`Discovery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// File stem, used as the result name
    pub display_name: String,
    pub extension: String,
    pub file_name: String,
    pub location: FileLocation,
}

impl DiscoveredFile {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        Self {
            display_name: path.stem_lossy(),
            extension: path.extension_lossy(),
            file_name: path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default(),
            location: FileLocation::Path(path.to_path_buf()),
        }
    }

    pub fn from_member(member: &str) -> Self {
        let path = Path::new(member);
        Self {
            display_name: path.stem_lossy(),
            extension: path.extension_lossy(),
            file_name: member.rsplit('/').next().unwrap_or(member).to_string(),
            location: FileLocation::Member(member.to_string()),
        }
    }
}

/// Handle that keeps discovered files readable.
pub enum Mount {
    Filesystem,
    Archive(ArchiveMount),
}

impl Mount {
    pub fn open(&mut self, file: &DiscoveredFile) -> Result<Box<dyn Read + '_>> {
        match (self, &file.location) {
            (Mount::Filesystem, FileLocation::Path(path)) => {
                Ok(Box::new(BufReader::new(File::open(path)?)))
            }
            (Mount::Archive(mount), FileLocation::Member(member)) => mount.open(member),
            (Mount::Filesystem, FileLocation::Member(member)) => Err(Error::Other(
                anyhow::anyhow!("Archive member '{member}' requested without a mounted archive"),
            )),
            (Mount::Archive(mount), FileLocation::Path(path)) => Err(Error::Other(anyhow::anyhow!(
                "File '{}' does not belong to archive '{}'",
                path.display(),
                mount.path().display()
            ))),
        }
    }
}

/// Files found for one source, in name order. Dropping it releases the mount.
pub struct Discovery {
    mount: Mount,
    files: Vec<DiscoveredFile>,
}

impl Discovery {
    pub fn new(mount: Mount, files: Vec<DiscoveredFile>) -> Self {
        Self { mount, files }
    }

    pub fn files(&self) -> &[DiscoveredFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Keeps only the files matching `predicate`, preserving order.
    pub fn retain<F: FnMut(&DiscoveredFile) -> bool>(&mut self, predicate: F) {
        self.files.retain(predicate);
    }

    /// Opens one file for reading. The returned stream must be dropped before the next open.
    pub fn open(&mut self, file: &DiscoveredFile) -> Result<Box<dyn Read + '_>> {
        self.mount.open(file)
    }
}

/// Resolves a path string to a location, local filesystem first.
///
/// # Errors
/// * `Error::SourceNotFound` if neither the filesystem nor the resource namespace has it
pub fn locate(path: &str, resources: &ResourceNamespace) -> Result<SourceLocator> {
    let local = Path::new(path);
    if local.exists() {
        return Ok(SourceLocator::new(Scheme::Local(local.to_path_buf()), local.is_dir()));
    }

    resources
        .locate(path)?
        .ok_or_else(|| Error::SourceNotFound { path: path.to_string() })
}

/// Resolves a path string and enumerates the files behind it.
///
/// # Arguments
/// * `path` - File or directory, local or packaged
/// * `resources` - Fallback namespace for paths missing locally
///
/// # Returns
/// * `Result<Discovery>` - The file itself, or a directory's immediate files sorted by name
pub fn resolve(path: &str, resources: &ResourceNamespace) -> Result<Discovery> {
    let locator = locate(path, resources)?;
    log::debug!("Resolved '{path}' to {locator}");
    let loader = locator.loader();
    loader.discover()
}
