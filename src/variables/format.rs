use crate::constants::SUPPORTED_EXTENSIONS;
use crate::ext::PathExt;
use std::path::Path;

/// Checks whether a file extension names a supported variables format.
///
/// The comparison ignores ASCII case, so `YAML` and `Json` are accepted.
pub fn is_supported_extension(extension: &str) -> bool {
    SUPPORTED_EXTENSIONS.iter().any(|supported| extension.eq_ignore_ascii_case(supported))
}

/// Filtering predicate over a file name or path. Only the final extension is inspected.
///
/// # Returns
/// * `true` - for `.json`, `.yaml` and `.yml` files in any case
/// * `false` - for everything else, including files without an extension
pub fn accepts<P: AsRef<Path>>(file_name: P) -> bool {
    is_supported_extension(&file_name.as_ref().extension_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_supported_extensions_in_any_case() {
        for extension in SUPPORTED_EXTENSIONS {
            assert!(accepts(format!("file.{extension}")));
            assert!(accepts(format!("file.{}", extension.to_uppercase())));
        }
        assert!(accepts("dir/nested.Yml"));
    }

    #[test]
    fn rejects_other_extensions() {
        assert!(!accepts("file.txt"));
        assert!(!accepts("file.yaml.bak"));
        assert!(!accepts("yaml"));
        assert!(!accepts(".json"));
        assert!(!accepts("file"));
    }
}
