use super::definition::GraphDefinition;
use crate::error::GraphConversionError;

/// A trait for custom canvas models that can be converted into a blocksmith
/// `GraphDefinition`.
///
/// This is the primary extension point for making blocksmith editor-agnostic.
/// The bundled `ui::UiCanvas` implements it for the React-Flow-shaped JSON the
/// reference canvas emits; by implementing this trait on your own structs you
/// provide a translation layer from any other editor format.
///
/// # Example
///
/// ```rust,no_run
/// use blocksmith::graph::{GraphDefinition, IntoGraph, NodeDefinition};
/// use blocksmith::error::GraphConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyBlock { id: String, block_type: String }
/// struct MyCanvas { blocks: Vec<MyBlock> }
///
/// // 2. Implement `IntoGraph` for your top-level struct.
/// impl IntoGraph for MyCanvas {
///     fn into_graph(self) -> Result<GraphDefinition, GraphConversionError> {
///         let nodes = self
///             .blocks
///             .into_iter()
///             .map(|b| NodeDefinition::new(b.id, b.block_type))
///             .collect();
///
///         Ok(GraphDefinition {
///             nodes,
///             edges: vec![], // Convert your wires here as well
///         })
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into a canonical block graph.
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError>;
}
