use ahash::AHashMap;

/// The complete, canonical definition of a block graph, ready for generation.
/// This is the target structure for any custom canvas format conversion.
#[derive(Debug, Clone, Default)]
pub struct GraphDefinition {
    pub nodes: Vec<NodeDefinition>,
    pub edges: Vec<EdgeDefinition>,
}

/// Defines a single typed block placed on the canvas.
#[derive(Debug, Clone)]
pub struct NodeDefinition {
    /// Opaque id, unique within a graph.
    pub id: String,
    /// Kind tag, e.g. `"dataVariable"` or `"publicFunction"`.
    pub kind: String,
    /// Loosely-typed field bag as edited on the canvas. Emitters read it
    /// through the typed `NodeKind` view; missing or empty fields take the
    /// per-kind default literal.
    pub data: AHashMap<String, String>,
    /// Canvas coordinates. Irrelevant to generation, carried for round-trips.
    pub position: Position,
}

/// Canvas coordinates of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Defines a directed wire between a node's output handle and another node.
#[derive(Debug, Clone)]
pub struct EdgeDefinition {
    pub source: String,
    /// Which output port the wire leaves from: `"out"`, `"then"` or `"else"`.
    pub source_handle: String,
    pub target: String,
    /// Input port on the target. Carried for fidelity, ignored by generation.
    pub target_handle: Option<String>,
}

impl NodeDefinition {
    /// Convenience constructor used by tests and fixture tooling.
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            data: AHashMap::new(),
            position: Position::default(),
        }
    }

    /// Builder-style field assignment on the data bag.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(name.into(), value.into());
        self
    }
}

impl EdgeDefinition {
    /// Convenience constructor for an edge on the given source handle.
    pub fn new(
        source: impl Into<String>,
        source_handle: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            source_handle: source_handle.into(),
            target: target.into(),
            target_handle: None,
        }
    }
}
