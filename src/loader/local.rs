use crate::error::{Error, Result};
use crate::loader::interface::SourceLoader;
use crate::loader::{DiscoveredFile, Discovery, Mount};
use std::path::Path;
use walkdir::WalkDir;

/// Loader for variable files stored on a filesystem, either the user's or a shipped resource directory.
pub struct LocalLoader<P: AsRef<Path>> {
    path: P,
    is_dir: bool,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    /// Creates a new LocalLoader instance.
    pub fn new(path: P, is_dir: bool) -> Self {
        Self { path, is_dir }
    }
}

impl<P: AsRef<Path>> SourceLoader for LocalLoader<P> {
    /// Yields the file itself, or the immediate regular files of a directory sorted by name.
    ///
    /// # Errors
    /// * `Error::EmptyDirectory` if the directory holds no regular files
    fn discover(&self) -> Result<Discovery> {
        let path = self.path.as_ref();
        if !self.is_dir {
            return Ok(Discovery::new(Mount::Filesystem, vec![DiscoveredFile::from_path(path)]));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                // Entries that cannot be inspected, like dangling symlinks, are not regular files
                Err(err) if err.depth() > 0 => {
                    log::debug!("Skipping unreadable entry: {err}");
                    continue;
                }
                Err(err) => return Err(std::io::Error::from(err).into()),
            };
            if entry.file_type().is_file() {
                files.push(DiscoveredFile::from_path(entry.path()));
            } else {
                log::debug!("Skipping non-file entry '{}'", entry.path().display());
            }
        }

        if files.is_empty() {
            return Err(Error::EmptyDirectory { path: path.display().to_string() });
        }

        Ok(Discovery::new(Mount::Filesystem, files))
    }
}
