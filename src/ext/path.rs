use std::path::{Component, Path, PathBuf};

/// Extension trait for Path with lexical normalization and lossy name accessors
pub trait PathExt {
    /// Lexically normalizes a path: drops `.` components and folds `..` into
    /// the preceding normal component. The filesystem is never consulted.
    ///
    /// # Examples
    /// ```
    /// use tgen::ext::PathExt;
    /// use std::path::{Path, PathBuf};
    ///
    /// let path = Path::new("variables/./users/../groups.yml");
    /// assert_eq!(path.normalize(), PathBuf::from("variables/groups.yml"));
    /// ```
    fn normalize(&self) -> PathBuf;

    /// File name without its final extension, lossily converted.
    fn stem_lossy(&self) -> String;

    /// Final extension of the file name, lossily converted. Empty when absent.
    fn extension_lossy(&self) -> String;
}

impl PathExt for Path {
    fn normalize(&self) -> PathBuf {
        let mut normalized = PathBuf::new();
        for component in self.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => match normalized.components().next_back() {
                    Some(Component::Normal(_)) => {
                        normalized.pop();
                    }
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                    _ => normalized.push(".."),
                },
                other => normalized.push(other.as_os_str()),
            }
        }
        if normalized.as_os_str().is_empty() {
            normalized.push(".");
        }
        normalized
    }

    fn stem_lossy(&self) -> String {
        self.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
    }

    fn extension_lossy(&self) -> String {
        self.extension().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
    }
}
