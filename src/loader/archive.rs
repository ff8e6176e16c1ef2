use crate::error::{Error, Result};
use crate::loader::interface::SourceLoader;
use crate::loader::{DiscoveredFile, Discovery, Mount};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// An opened zip archive. Members can only be read while the mount is alive;
/// dropping it releases the archive handle.
pub struct ArchiveMount {
    path: PathBuf,
    archive: ZipArchive<BufReader<File>>,
}

impl ArchiveMount {
    pub fn mount<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        log::debug!("Mounting archive '{}'", path.display());
        let file = File::open(&path)?;
        let archive = ZipArchive::new(BufReader::new(file))?;
        Ok(Self { path, archive })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether `member` names a file entry.
    pub fn contains_file(&self, member: &str) -> bool {
        !member.ends_with('/') && self.archive.file_names().any(|name| name == member)
    }

    /// Whether `member` names a directory, explicit or implied by deeper entries.
    pub fn contains_dir(&self, member: &str) -> bool {
        let prefix = format!("{}/", member.trim_end_matches('/'));
        self.archive.file_names().any(|name| name.starts_with(&prefix))
    }

    /// File entries directly below `member`, sorted by name.
    pub fn children(&self, member: &str) -> Vec<String> {
        let prefix = format!("{}/", member.trim_end_matches('/'));
        let mut children: Vec<String> = self
            .archive
            .file_names()
            .filter(|name| {
                name.strip_prefix(&prefix)
                    .is_some_and(|rest| !rest.is_empty() && !rest.contains('/'))
            })
            .map(str::to_owned)
            .collect();
        children.sort();
        children.dedup();
        children
    }

    pub fn open(&mut self, member: &str) -> Result<Box<dyn Read + '_>> {
        Ok(Box::new(self.archive.by_name(member)?))
    }

    pub fn read_to_string(&mut self, member: &str) -> Result<String> {
        let mut content = String::new();
        self.open(member)?.read_to_string(&mut content)?;
        Ok(content)
    }
}

impl Drop for ArchiveMount {
    fn drop(&mut self) {
        log::debug!("Unmounting archive '{}'", self.path.display());
    }
}

/// Loader for variable files packed inside a zip resource archive.
pub struct ArchiveLoader {
    archive: PathBuf,
    member: String,
    is_dir: bool,
}

impl ArchiveLoader {
    pub fn new(archive: PathBuf, member: String, is_dir: bool) -> Self {
        Self { archive, member, is_dir }
    }
}

impl SourceLoader for ArchiveLoader {
    /// Mounts the archive and lists the member, or the member's immediate files.
    ///
    /// The mount travels with the returned discovery so members stay readable.
    fn discover(&self) -> Result<Discovery> {
        let mount = ArchiveMount::mount(&self.archive)?;

        let files: Vec<DiscoveredFile> = if self.is_dir {
            mount.children(&self.member).iter().map(|m| DiscoveredFile::from_member(m)).collect()
        } else {
            vec![DiscoveredFile::from_member(&self.member)]
        };

        if files.is_empty() {
            return Err(Error::EmptyDirectory {
                path: format!("{}!/{}", self.archive.display(), self.member),
            });
        }

        Ok(Discovery::new(Mount::Archive(mount), files))
    }
}
