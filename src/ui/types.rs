use crate::error::{CanvasParseError, GraphConversionError};
use crate::graph::{EdgeDefinition, GraphDefinition, IntoGraph, NodeDefinition, Position};
use ahash::AHashMap;
use serde::Deserialize;

/// A node as serialized by the canvas editor.
///
/// The editor stores arbitrary JSON in `data`; the conversion below flattens
/// every value to its string form (nulls count as absent) since the generator
/// consumes literal text only.
#[derive(Debug, Deserialize, Clone)]
pub struct UiNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: AHashMap<String, serde_json::Value>,
    #[serde(default)]
    pub position: UiPosition,
}

/// Canvas coordinates as serialized by the editor.
#[derive(Debug, Deserialize, Clone, Copy, Default)]
pub struct UiPosition {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// A wire between two node handles as serialized by the canvas editor.
#[derive(Debug, Deserialize, Clone)]
pub struct UiEdge {
    pub source: String,
    #[serde(default)]
    #[serde(alias = "sourceHandle")]
    pub source_handle: Option<String>,
    pub target: String,
    #[serde(default)]
    #[serde(alias = "targetHandle")]
    pub target_handle: Option<String>,
}

/// Complete canvas snapshot: the node and edge arrays the editor ships on
/// every change notification.
#[derive(Debug, Deserialize, Clone)]
pub struct UiCanvas {
    #[serde(default)]
    pub nodes: Vec<UiNode>,
    #[serde(default)]
    pub edges: Vec<UiEdge>,
}

impl UiCanvas {
    /// Parses a canvas snapshot from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self, CanvasParseError> {
        serde_json::from_str(json).map_err(|e| CanvasParseError::JsonParseError(e.to_string()))
    }
}

impl IntoGraph for UiCanvas {
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|node| NodeDefinition {
                id: node.id,
                kind: node.kind,
                data: node
                    .data
                    .into_iter()
                    .filter_map(|(name, value)| stringify_field(value).map(|v| (name, v)))
                    .collect(),
                position: Position {
                    x: node.position.x,
                    y: node.position.y,
                },
            })
            .collect();

        let edges = self
            .edges
            .into_iter()
            .map(|edge| EdgeDefinition {
                source: edge.source,
                source_handle: edge.source_handle.unwrap_or_default(),
                target: edge.target,
                target_handle: edge.target_handle,
            })
            .collect();

        Ok(GraphDefinition { nodes, edges })
    }
}

/// Flattens a JSON data value to the literal text the emitters consume.
/// `None` means the field is absent and the per-kind default applies.
fn stringify_field(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
