use crate::{error::Result, ioutils::write_file, template::WriteOp};

/// Writes rendered files to disk, or only reports them in dry-run mode.
pub struct FileProcessor {
    dry_run: bool,
}

impl FileProcessor {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Writes every operation in order, stopping at the first failure.
    pub fn write_all(&self, operations: &[WriteOp]) -> Result<()> {
        for operation in operations {
            log::debug!("Handling file operation: {}", operation.target.display());
            if !self.dry_run {
                write_file(&operation.content, &operation.target)?;
            }
            log::info!("{}", operation.get_message(self.dry_run));
        }
        Ok(())
    }
}
