use crate::error::Result;
use std::path::PathBuf;

/// Text a template attached to an output path while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Everything one render produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOutput {
    /// Main output of the template, outside of any attached block
    pub text: String,
    /// Attached files, in the order the template produced them
    pub files: Vec<RenderedFile>,
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Adds a template to the renderer's template collection.
    ///
    /// # Arguments
    /// * `name` - Name to identify the template
    /// * `template` - Template content as string
    ///
    /// # Errors
    /// Fails when the template does not parse.
    fn add_template(&mut self, name: &str, template: &str) -> Result<()>;

    /// Renders a previously added template with the given context.
    ///
    /// # Arguments
    /// * `template_name` - Name the template was added under
    /// * `context` - Top-level bindings for rendering
    ///
    /// # Returns
    /// * `Result<RenderOutput>` - Main text plus any files attached during the render
    fn render(&self, template_name: &str, context: &serde_json::Value) -> Result<RenderOutput>;
}
