use super::filters::*;
use crate::constants::{FAIL_FUNCTION, SAVE_FILE_FILTER};
use crate::error::Result;
use crate::loader::ResourceNamespace;
use crate::renderer::interface::{RenderOutput, RenderedFile, TemplateRenderer};
use minijinja::{AutoEscape, Environment, Error, ErrorKind};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

type SavedFiles = Arc<Mutex<Vec<RenderedFile>>>;

/// MiniJinja-based template rendering engine.
///
/// Besides plain rendering, templates can attach output files with a filter block:
///
/// ```jinja
/// {% filter save_file(output_path ~ "/users.json") %}
/// [{% for user in users %}"{{ user.name }}"{% if not loop.last %}, {% endif %}{% endfor %}]
/// {% endfilter %}
/// ```
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with default environment.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);

        // Add all the custom filters
        env.add_filter("camel_case", to_camel_case);
        env.add_filter("kebab_case", to_kebab_case);
        env.add_filter("pascal_case", to_pascal_case);
        env.add_filter("screaming_snake_case", to_screaming_snake_case);
        env.add_filter("snake_case", to_snake_case);
        env.add_filter("table_case", to_table_case);
        env.add_filter("train_case", to_train_case);
        env.add_filter("plural", to_plural);
        env.add_filter("singular", to_singular);
        env.add_filter("foreign_key", to_foreign_key);
        env.add_filter("regex", regex_filter);
        env.add_function(FAIL_FUNCTION, fail_function);

        Self { env }
    }

    /// Resolves `{% include %}` and `{% import %}` names against `search_dir` first,
    /// then against the resource namespace below `resource_prefix`.
    pub fn set_template_loader(
        &mut self,
        search_dir: Option<PathBuf>,
        resource_prefix: Option<String>,
        resources: ResourceNamespace,
    ) {
        let fs_loader = search_dir.map(|dir| minijinja::path_loader(dir));
        self.env.set_loader(move |name| {
            if let Some(fs_loader) = &fs_loader {
                if let Some(source) = fs_loader(name)? {
                    return Ok(Some(source));
                }
            }
            let key = match &resource_prefix {
                Some(prefix) => format!("{prefix}/{name}"),
                None => name.to_string(),
            };
            resources.read_to_string(&key).map_err(|e| {
                Error::new(
                    ErrorKind::InvalidOperation,
                    format!("cannot load template '{name}' from resources: {e}"),
                )
            })
        });
    }

    /// Environment for a single render: a fresh `save_file` filter writing into `saved`.
    fn render_env(&self, saved: SavedFiles) -> Environment<'static> {
        let mut env = self.env.clone();
        env.add_filter(SAVE_FILE_FILTER, move |content: String, path: String| {
            save_file(&saved, content, path)
        });
        env
    }
}

fn save_file(saved: &SavedFiles, content: String, path: String) -> Result<String, Error> {
    if path.trim().is_empty() {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            "save_file requires a non-empty output file path",
        ));
    }
    let mut files = saved.lock().map_err(|_| {
        Error::new(ErrorKind::InvalidOperation, "saved files collector is poisoned")
    })?;
    log::debug!("Attaching rendered block to '{path}'");
    files.push(RenderedFile { path: PathBuf::from(path), content });
    Ok(String::new())
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn add_template(&mut self, name: &str, template: &str) -> Result<()> {
        // Normalize the template name for cross-platform compatibility
        let normalized_name = name.replace('\\', "/");
        self.env.add_template_owned(normalized_name, template.to_string())?;
        Ok(())
    }

    fn render(&self, template_name: &str, context: &serde_json::Value) -> Result<RenderOutput> {
        let saved = SavedFiles::default();
        let text = {
            let env = self.render_env(Arc::clone(&saved));
            let tmpl = env.get_template(&template_name.replace('\\', "/"))?;
            tmpl.render(context)?
        };

        let files = match Arc::try_unwrap(saved) {
            Ok(mutex) => mutex.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner()),
            Err(shared) => shared.lock().map(|files| files.clone()).unwrap_or_default(),
        };

        Ok(RenderOutput { text, files })
    }
}
