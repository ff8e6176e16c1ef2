use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::loader::ResourceNamespace;
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};
use std::path::{Path, PathBuf};

/// A template located on disk or in the resource namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    /// Name the template is registered under in the renderer
    pub name: String,
    pub content: String,
    /// Local directory holding the template, used for includes
    pub search_dir: Option<PathBuf>,
    /// Resource key directory holding the template, used for includes
    pub resource_prefix: Option<String>,
}

/// Finds a template on the local filesystem, falling back to the resource namespace.
///
/// # Errors
/// * `Error::TemplateNotFound` if neither location has a file at `path`
pub fn load_template(path: &str, resources: &ResourceNamespace) -> Result<TemplateSource> {
    let local = Path::new(path).normalize();
    if local.is_file() {
        log::debug!("Loading template from local path '{}'", local.display());
        let content = std::fs::read_to_string(&local)?;
        let name = local
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string());
        let search_dir = local.parent().map(|p| {
            if p.as_os_str().is_empty() {
                PathBuf::from(".")
            } else {
                p.to_path_buf()
            }
        });
        return Ok(TemplateSource { name, content, search_dir, resource_prefix: None });
    }

    let Some(key) = ResourceNamespace::normalize_key(path) else {
        return Err(Error::TemplateNotFound { path: path.to_string() });
    };
    match resources.read_to_string(&key)? {
        Some(content) => {
            log::debug!("Loading template from resources '{key}'");
            let (prefix, name) = match key.rsplit_once('/') {
                Some((prefix, name)) => (Some(prefix.to_string()), name.to_string()),
                None => (None, key.clone()),
            };
            Ok(TemplateSource { name, content, search_dir: None, resource_prefix: prefix })
        }
        None => Err(Error::TemplateNotFound { path: path.to_string() }),
    }
}

/// Builds a renderer holding the template, with includes resolved next to it.
///
/// Template syntax errors surface here, before any variables are read.
pub fn get_template_engine(
    template: &TemplateSource,
    resources: &ResourceNamespace,
) -> Result<MiniJinjaRenderer> {
    let mut engine = MiniJinjaRenderer::new();
    engine.set_template_loader(
        template.search_dir.clone(),
        template.resource_prefix.clone(),
        resources.clone(),
    );
    engine.add_template(&template.name, &template.content)?;
    Ok(engine)
}
