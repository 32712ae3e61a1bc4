use crate::graph::GraphDefinition;

pub mod declaration;
pub mod parsing;
pub mod statement;
pub mod traversal;

use declaration::{DeclarationEmitter, Section};
use traversal::{GraphIndex, HANDLE_OUT};

/// Placeholder returned for a canvas with no nodes at all.
pub const EMPTY_CANVAS_PLACEHOLDER: &str =
    ";; Start building your contract by dragging blocks onto the canvas.";

/// Placeholder returned when no module block anchors the program.
pub const MISSING_MODULE_PLACEHOLDER: &str =
    ";; Start by dragging a 'Module' block to the canvas.";

const MODULE_KIND: &str = "module";

/// The program assembler: renders one graph snapshot into contract source.
///
/// Construction indexes the snapshot; `generate` may then be called any
/// number of times and always yields byte-identical text for an unchanged
/// graph. The generator owns nothing, mutates nothing and never fails.
pub struct Generator<'a> {
    graph: &'a GraphDefinition,
    index: GraphIndex<'a>,
}

impl<'a> Generator<'a> {
    pub fn new(graph: &'a GraphDefinition) -> Self {
        Self {
            graph,
            index: GraphIndex::new(graph),
        }
    }

    /// Renders the snapshot to Clarity source text.
    ///
    /// Declarations are discovered through the module's `"out"` edges in edge
    /// order. Non-function declarations come first, then a blank line, then
    /// the function bodies. Malformed wiring degrades to documented defaults
    /// and placeholder comments, never to an error.
    pub fn generate(&self) -> String {
        if self.graph.nodes.is_empty() {
            return EMPTY_CANVAS_PLACEHOLDER.to_string();
        }

        // First module wins when the canvas holds several.
        let Some(module) = self.graph.nodes.iter().find(|n| n.kind == MODULE_KIND) else {
            return MISSING_MODULE_PLACEHOLDER.to_string();
        };

        let emitter = DeclarationEmitter::new(&self.index);
        let mut globals = Vec::new();
        let mut functions = Vec::new();
        for node in self.index.successors(&module.id, HANDLE_OUT) {
            let block = emitter.emit(node);
            match block.section {
                Section::Globals => globals.push(block.text),
                Section::Functions => functions.push(block.text),
            }
        }

        let mut sections = Vec::new();
        if !globals.is_empty() {
            sections.push(globals.join("\n"));
        }
        if !functions.is_empty() {
            sections.push(functions.join("\n\n"));
        }

        let mut text = sections.join("\n\n");
        text.push('\n');
        text
    }
}

/// One-shot convenience over [`Generator`].
pub fn generate(graph: &GraphDefinition) -> String {
    Generator::new(graph).generate()
}
