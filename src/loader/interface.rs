use crate::error::Result;
use crate::loader::Discovery;

/// Trait for enumerating variable files behind a resolved source location.
pub trait SourceLoader {
    /// Lists the files behind the source, keeping open whatever mount is needed to read them.
    ///
    /// # Returns
    /// * `Result<Discovery>` - Files in name order, ready to be opened one at a time
    fn discover(&self) -> Result<Discovery>;
}
