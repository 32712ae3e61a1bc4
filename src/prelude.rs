//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the blocksmith crate. Import
//! this module to get access to the core functionality without having to
//! import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use blocksmith::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/canvas.json")?;
//! let graph = UiCanvas::from_json(&json)?.into_graph()?;
//!
//! let source = Generator::new(&graph).generate();
//! println!("{source}");
//! # Ok(())
//! # }
//! ```

// Core generation
pub use crate::generator::{
    EMPTY_CANVAS_PLACEHOLDER, Generator, MISSING_MODULE_PLACEHOLDER, generate,
};

// Emitters and traversal
pub use crate::generator::declaration::{DeclarationBlock, DeclarationEmitter, Section};
pub use crate::generator::parsing::{FunctionVisibility, NodeKind, Param};
pub use crate::generator::statement::StatementEmitter;
pub use crate::generator::traversal::{GraphIndex, HANDLE_ELSE, HANDLE_OUT, HANDLE_THEN};

// Graph model
pub use crate::graph::{EdgeDefinition, GraphDefinition, IntoGraph, NodeDefinition, Position};

// Canvas wire format
pub use crate::ui::{UiCanvas, UiEdge, UiNode};

// Diagnostics
pub use crate::diagnostics::{
    CompileOutcome, CompileStatus, ContractChecker, ContractValidator, LocalLinter,
    ValidationReport, validate,
};

// Error types
pub use crate::error::{CanvasParseError, CheckError, GraphConversionError};

// Map type used by the node data bag
pub use ahash::AHashMap;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
