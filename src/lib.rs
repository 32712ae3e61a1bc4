//! # Blocksmith - Visual Contract Graph to Clarity Source
//!
//! **Blocksmith** turns the block-and-wire graphs of a visual smart-contract
//! builder into Clarity source text. Users assemble typed blocks (module,
//! constants, data variables, maps, functions, statements) on a canvas and
//! wire them together; on every edit the canvas hands this crate an immutable
//! graph snapshot and receives back a deterministic, syntactically balanced
//! rendering of the whole contract.
//!
//! The generator is a total function: a canvas mid-edit is full of half-wired
//! blocks, dangling edges, missing fields and the occasional cycle, and all of
//! those degrade to documented defaults and placeholder comments instead of
//! errors. Correctness checking belongs to downstream validators, not here.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic and operates on a canonical internal graph
//! model. The primary workflow is:
//!
//! 1.  **Load Your Canvas**: Parse your editor's snapshot format. The bundled
//!     [`ui::UiCanvas`] covers the React-Flow-shaped JSON of the reference
//!     canvas; any other format plugs in through the [`graph::IntoGraph`]
//!     trait.
//! 2.  **Convert**: Obtain a [`graph::GraphDefinition`], the canonical model.
//! 3.  **Generate**: Run [`generator::Generator`] over the snapshot to get the
//!     contract text.
//! 4.  **Check (optional)**: Hand the text to [`diagnostics::validate`] for
//!     rule-level lint diagnostics, or to an external compiler through the
//!     [`diagnostics::ContractChecker`] seam.
//!
//! ## Quick Start
//!
//! ```rust
//! use blocksmith::generator::Generator;
//! use blocksmith::graph::{EdgeDefinition, GraphDefinition, NodeDefinition};
//!
//! // A module anchoring one data variable and one read-only getter.
//! let graph = GraphDefinition {
//!     nodes: vec![
//!         NodeDefinition::new("m1", "module"),
//!         NodeDefinition::new("v1", "dataVariable")
//!             .with_field("name", "counter")
//!             .with_field("type", "uint")
//!             .with_field("initialValue", "u0"),
//!         NodeDefinition::new("f1", "readOnlyFunction").with_field("name", "get-counter"),
//!         NodeDefinition::new("s1", "varGet").with_field("varName", "counter"),
//!     ],
//!     edges: vec![
//!         EdgeDefinition::new("m1", "out", "v1"),
//!         EdgeDefinition::new("m1", "out", "f1"),
//!         EdgeDefinition::new("f1", "out", "s1"),
//!     ],
//! };
//!
//! let source = Generator::new(&graph).generate();
//! assert!(source.contains("(define-data-var counter uint u0)"));
//! assert!(source.contains("(define-read-only (get-counter)"));
//! ```
//!
//! Or straight from a canvas snapshot:
//!
//! ```rust,no_run
//! use blocksmith::prelude::*;
//!
//! # fn run() -> Result<()> {
//! let json = std::fs::read_to_string("canvas.json")?;
//! let graph = UiCanvas::from_json(&json)?.into_graph()?;
//! let source = Generator::new(&graph).generate();
//!
//! let report = validate(&source);
//! for warning in &report.warnings {
//!     eprintln!("warning: {warning}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod diagnostics;
pub mod error;
pub mod generator;
pub mod graph;
pub mod prelude;
pub mod ui;
