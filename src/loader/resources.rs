//! Resource namespace shipped alongside the program.
//!
//! Consulted when a path is missing from the local filesystem. Each root is
//! either a plain directory or a zip archive; roots are searched in order and
//! the first hit wins.

use crate::constants::{ARCHIVE_EXTENSION, DEFAULT_RESOURCES_ARCHIVE, DEFAULT_RESOURCES_DIR};
use crate::error::Result;
use crate::ext::PathExt;
use crate::loader::archive::ArchiveMount;
use crate::loader::{Scheme, SourceLocator};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRoot {
    Directory(PathBuf),
    Archive(PathBuf),
}

impl ResourceRoot {
    /// Classifies a root by extension: `.zip` files are archives, anything else a directory.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if path.extension_lossy().eq_ignore_ascii_case(ARCHIVE_EXTENSION) {
            Self::Archive(path.to_path_buf())
        } else {
            Self::Directory(path.to_path_buf())
        }
    }

    fn exists(&self) -> bool {
        match self {
            Self::Directory(path) => path.is_dir(),
            Self::Archive(path) => path.is_file(),
        }
    }
}

impl std::fmt::Display for ResourceRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Directory(path) => write!(f, "resource directory '{}'", path.display()),
            Self::Archive(path) => write!(f, "resource archive '{}'", path.display()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResourceNamespace {
    roots: Vec<ResourceRoot>,
}

impl ResourceNamespace {
    pub fn new(roots: Vec<ResourceRoot>) -> Self {
        Self { roots }
    }

    /// Explicit roots first, then `resources/` and `resources.zip` next to the
    /// running executable when they exist.
    pub fn with_defaults<I, P>(explicit: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut roots: Vec<ResourceRoot> =
            explicit.into_iter().map(ResourceRoot::from_path).collect();

        if let Some(exe_dir) =
            std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            let defaults = [
                ResourceRoot::Directory(exe_dir.join(DEFAULT_RESOURCES_DIR)),
                ResourceRoot::Archive(exe_dir.join(DEFAULT_RESOURCES_ARCHIVE)),
            ];
            roots.extend(defaults.into_iter().filter(ResourceRoot::exists));
        }

        Self { roots }
    }

    pub fn roots(&self) -> &[ResourceRoot] {
        &self.roots
    }

    /// Turns a user path into a lookup key: `/` separators, no leading `./` or `/`.
    ///
    /// Keys that would climb out of a root (`..`) or name the root itself are rejected.
    pub fn normalize_key(key: &str) -> Option<String> {
        let unified = key.replace('\\', "/");
        let mut segments = Vec::new();
        for segment in unified.split('/') {
            match segment {
                "" | "." => {}
                ".." => return None,
                other => segments.push(other),
            }
        }
        if segments.is_empty() {
            None
        } else {
            Some(segments.join("/"))
        }
    }

    /// Finds the first root holding `key`.
    ///
    /// Archives are mounted only for the duration of the probe.
    pub fn locate(&self, key: &str) -> Result<Option<SourceLocator>> {
        let Some(key) = Self::normalize_key(key) else {
            return Ok(None);
        };

        for root in &self.roots {
            if !root.exists() {
                log::debug!("Skipping missing {root}");
                continue;
            }
            match root {
                ResourceRoot::Directory(dir) => {
                    let candidate = dir.join(&key);
                    if candidate.exists() {
                        let is_dir = candidate.is_dir();
                        return Ok(Some(SourceLocator::new(Scheme::Packaged(candidate), is_dir)));
                    }
                }
                ResourceRoot::Archive(archive) => {
                    let mount = ArchiveMount::mount(archive)?;
                    let is_dir = if mount.contains_file(&key) {
                        false
                    } else if mount.contains_dir(&key) {
                        true
                    } else {
                        continue;
                    };
                    let scheme =
                        Scheme::Archived { archive: archive.clone(), member: key.clone() };
                    return Ok(Some(SourceLocator::new(scheme, is_dir)));
                }
            }
        }

        Ok(None)
    }

    /// Reads a single resource file as text. Directories and misses yield `None`.
    pub fn read_to_string(&self, key: &str) -> Result<Option<String>> {
        let Some(locator) = self.locate(key)? else {
            return Ok(None);
        };
        if locator.is_dir {
            return Ok(None);
        }
        match locator.scheme {
            Scheme::Packaged(path) | Scheme::Local(path) => {
                Ok(Some(std::fs::read_to_string(path)?))
            }
            Scheme::Archived { archive, member } => {
                let mut mount = ArchiveMount::mount(archive)?;
                Ok(Some(mount.read_to_string(&member)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn normalizes_keys() {
        assert_eq!(ResourceNamespace::normalize_key("./vars/users"), Some("vars/users".into()));
        assert_eq!(ResourceNamespace::normalize_key("/vars//users/"), Some("vars/users".into()));
        assert_eq!(ResourceNamespace::normalize_key("vars\\users"), Some("vars/users".into()));
        assert_eq!(ResourceNamespace::normalize_key("../secrets"), None);
        assert_eq!(ResourceNamespace::normalize_key("./"), None);
    }

    #[test]
    fn classifies_roots_by_extension() {
        assert_eq!(
            ResourceRoot::from_path("bundle.ZIP"),
            ResourceRoot::Archive(PathBuf::from("bundle.ZIP"))
        );
        assert_eq!(
            ResourceRoot::from_path("bundle"),
            ResourceRoot::Directory(PathBuf::from("bundle"))
        );
    }

    #[test]
    fn first_root_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(first.path().join("vars.yaml"), "from: first").unwrap();
        fs::write(second.path().join("vars.yaml"), "from: second").unwrap();
        let namespace = ResourceNamespace::new(vec![
            ResourceRoot::Directory(first.path().to_path_buf()),
            ResourceRoot::Directory(second.path().to_path_buf()),
        ]);

        let content = namespace.read_to_string("vars.yaml").unwrap();

        assert_eq!(content.as_deref(), Some("from: first"));
    }

    #[test]
    fn missing_roots_are_skipped() {
        let namespace = ResourceNamespace::new(vec![
            ResourceRoot::Directory(PathBuf::from("/path/that/does/not/exist")),
            ResourceRoot::Archive(PathBuf::from("/path/that/does/not/exist.zip")),
        ]);

        assert!(namespace.locate("vars.yaml").unwrap().is_none());
    }
}
