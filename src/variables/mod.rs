//! Variable discovery and aggregation
//!
//! This module turns variable paths into data sets ready for rendering:
//! - `format`: Extension filter for supported data files
//! - `parser`: JSON/YAML decoding into an ordered mapping
//! - `reader`: Per-path aggregation and multi-path combination

pub mod format;
pub mod parser;
pub mod reader;

pub use format::accepts;
pub use parser::{parse, VariableMapping};
pub use reader::{fold_combined, AggregationMode, NamedResult, VariablesReader};
