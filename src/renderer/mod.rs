//! Template rendering
//!
//! - `interface`: The renderer contract consumed by the render driver
//! - `minijinja`: MiniJinja implementation with the `save_file` block filter
//! - `filters`: Case conversion, regex and failure helpers exposed to templates

pub mod filters;
pub mod interface;
pub mod minijinja;

pub use self::minijinja::MiniJinjaRenderer;
pub use interface::{RenderOutput, RenderedFile, TemplateRenderer};
