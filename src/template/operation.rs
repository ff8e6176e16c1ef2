use std::path::PathBuf;

/// A rendered file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOp {
    pub target: PathBuf,
    pub content: String,
    pub target_exists: bool,
    /// Name of the variables result that produced it
    pub origin: String,
}

impl WriteOp {
    /// Gets a message describing the write and its status.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };
        if self.target_exists {
            format!(
                "{}Saving rendered file '{}' from '{}' (overwriting existing file)",
                prefix,
                self.target.display(),
                self.origin
            )
        } else {
            format!(
                "{}Saving rendered file '{}' from '{}'",
                prefix,
                self.target.display(),
                self.origin
            )
        }
    }
}
