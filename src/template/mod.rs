//! Template processing for tgen
//!
//! This module contains the render driver components:
//! - `loader`: Locates the template and prepares the rendering engine
//! - `operation`: Files produced by rendering, waiting to be written
//! - `processor`: Binds each variables result and renders the template

pub mod loader;
pub mod operation;
pub mod processor;

pub use loader::{get_template_engine, load_template, TemplateSource};
pub use operation::WriteOp;
pub use processor::{form_output_path, RenderBindings, TemplateProcessor};
