use crate::constants::OUTPUT_PATH_VARIABLE;
use crate::error::Result;
use crate::renderer::TemplateRenderer;
use crate::variables::{NamedResult, VariableMapping};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use super::operation::WriteOp;

/// Output location for one result: the output root itself when the run has a
/// single result, `output_root/name` otherwise.
pub fn form_output_path(total: usize, output_root: &Path, name: &str) -> PathBuf {
    if total == 1 {
        output_root.to_path_buf()
    } else {
        output_root.join(name)
    }
}

/// Top-level bindings for one render, built fresh for every result.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderBindings {
    bindings: Map<String, Value>,
}

impl RenderBindings {
    /// Variables first, then the reserved output path binding, which replaces a
    /// user variable of the same name.
    pub fn new(mapping: &VariableMapping, output_path: &Path) -> Self {
        let mut bindings: Map<String, Value> =
            mapping.iter().map(|(key, value)| (key.clone(), value.clone())).collect();
        if bindings.contains_key(OUTPUT_PATH_VARIABLE) {
            log::debug!("Variable '{OUTPUT_PATH_VARIABLE}' is reserved and will be overwritten");
        }
        bindings.insert(
            OUTPUT_PATH_VARIABLE.to_string(),
            Value::String(output_path.to_string_lossy().into_owned()),
        );
        Self { bindings }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.bindings.get(key)
    }

    pub fn into_context(self) -> Value {
        Value::Object(self.bindings)
    }
}

/// Drives the renderer over aggregated variables and collects the files to write.
pub struct TemplateProcessor<'a> {
    engine: &'a dyn TemplateRenderer,
    template_name: &'a str,
    output_root: &'a Path,
}

impl<'a> TemplateProcessor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        template_name: &'a str,
        output_root: &'a Path,
    ) -> Self {
        Self { engine, template_name, output_root }
    }

    /// Renders the template for one result.
    ///
    /// # Arguments
    /// * `result` - Variables to bind
    /// * `total` - Number of results in the whole run, decides the output path
    ///
    /// # Returns
    /// * `Result<Vec<WriteOp>>` - Files the template attached, in render order
    pub fn process(&self, result: &NamedResult, total: usize) -> Result<Vec<WriteOp>> {
        let output_path = form_output_path(total, self.output_root, &result.name);
        log::info!("Rendering '{}' with output path '{}'", result.name, output_path.display());

        let context = RenderBindings::new(&result.mapping, &output_path).into_context();
        let output = self.engine.render(self.template_name, &context)?;

        if !output.text.trim().is_empty() {
            log::debug!(
                "Discarding {} bytes of main template output for '{}'",
                output.text.len(),
                result.name
            );
        }

        Ok(output
            .files
            .into_iter()
            .map(|file| WriteOp {
                target_exists: file.path.exists(),
                target: file.path,
                content: file.content,
                origin: result.name.clone(),
            })
            .collect())
    }

    /// Renders every result before anything is written; the first render error aborts the run.
    ///
    /// When several renders attach the same path the last one wins.
    pub fn process_all(&self, results: &[NamedResult]) -> Result<Vec<WriteOp>> {
        let total = results.len();
        let mut operations: IndexMap<PathBuf, WriteOp> = IndexMap::new();
        for result in results {
            for operation in self.process(result, total)? {
                if let Some(previous) = operations.get(&operation.target) {
                    log::warn!(
                        "'{}' from '{}' replaces the file rendered from '{}'",
                        operation.target.display(),
                        operation.origin,
                        previous.origin
                    );
                }
                operations.insert(operation.target.clone(), operation);
            }
        }
        Ok(operations.into_values().collect())
    }
}
