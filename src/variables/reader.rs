use crate::constants::{COMBINED_NAME, SUPPORTED_EXTENSIONS};
use crate::error::Result;
use crate::loader::{resolve, ResourceNamespace};
use crate::variables::format::accepts;
use crate::variables::parser::{parse, VariableMapping};
use indexmap::IndexMap;
use serde_json::Value;

/// Variables read from one file, named after the file stem.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedResult {
    pub name: String,
    pub mapping: VariableMapping,
}

impl NamedResult {
    pub fn new<S: Into<String>>(name: S, mapping: VariableMapping) -> Self {
        Self { name: name.into(), mapping }
    }
}

/// How results from several paths are put together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AggregationMode {
    /// One result per file, in discovery order.
    #[default]
    Separate,
    /// A single `COMBINED` result; every key maps to the list of values found for it.
    Combined,
}

impl AggregationMode {
    pub fn from_combine_flag(combine: bool) -> Self {
        if combine {
            Self::Combined
        } else {
            Self::Separate
        }
    }
}

impl std::fmt::Display for AggregationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregationMode::Separate => write!(f, "separate"),
            AggregationMode::Combined => write!(f, "combined"),
        }
    }
}

/// Reads variable files from local paths or the resource namespace.
pub struct VariablesReader<'a> {
    resources: &'a ResourceNamespace,
}

impl<'a> VariablesReader<'a> {
    pub fn new(resources: &'a ResourceNamespace) -> Self {
        Self { resources }
    }

    /// Reads every supported file behind one path.
    ///
    /// Files with unsupported extensions are skipped with a warning. Each stream is
    /// closed before the next file is opened.
    ///
    /// # Returns
    /// * `Result<Vec<NamedResult>>` - One result per accepted file, in name order
    ///
    /// # Errors
    /// * `Error::SourceNotFound`, `Error::EmptyDirectory` from resolution
    /// * `Error::MalformedContent` for the first file that fails to parse
    pub fn aggregate(&self, path: &str) -> Result<Vec<NamedResult>> {
        let mut discovery = resolve(path, self.resources)?;

        discovery.retain(|file| {
            let supported = accepts(&file.file_name);
            if !supported {
                log::warn!(
                    "Unrecognized variables file format! Supported extensions: {}. Skipping file: {}",
                    SUPPORTED_EXTENSIONS.join(", "),
                    file.location
                );
            }
            supported
        });

        let files = discovery.files().to_vec();
        let mut results = Vec::with_capacity(files.len());
        for file in &files {
            log::debug!("Reading variables from '{}'", file.location);
            let reader = discovery.open(file)?;
            let mapping = parse(reader, &file.location.to_string())?;
            results.push(NamedResult::new(file.display_name.clone(), mapping));
        }

        if results.is_empty() {
            log::warn!("No variables were read from '{path}'");
        }

        Ok(results)
    }

    /// Reads several paths in order and puts the results together according to `mode`.
    ///
    /// Any resolution or parse failure aborts the whole call.
    pub fn combine<S: AsRef<str>>(
        &self,
        paths: &[S],
        mode: AggregationMode,
    ) -> Result<Vec<NamedResult>> {
        let mut named = Vec::new();
        for path in paths {
            named.extend(self.aggregate(path.as_ref())?);
        }

        let results = match mode {
            AggregationMode::Separate => named,
            AggregationMode::Combined if named.is_empty() => named,
            AggregationMode::Combined => vec![fold_combined(named)],
        };

        if results.is_empty() {
            log::warn!("No data was read from the provided variables paths!");
        }

        Ok(results)
    }
}

/// Folds results into one `COMBINED` result.
///
/// Keys keep first-seen order. Every value becomes a list of the values found
/// under that key, in visiting order, even when only one result has the key.
pub fn fold_combined<I: IntoIterator<Item = NamedResult>>(results: I) -> NamedResult {
    let mut combined: IndexMap<String, Vec<Value>> = IndexMap::new();
    for result in results {
        for (key, value) in result.mapping {
            combined.entry(key).or_default().push(value);
        }
    }

    let mapping = combined.into_iter().map(|(key, values)| (key, Value::Array(values))).collect();
    NamedResult::new(COMBINED_NAME, mapping)
}
