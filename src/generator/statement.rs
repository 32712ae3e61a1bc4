use super::parsing::NodeKind;
use super::traversal::{GraphIndex, HANDLE_ELSE, HANDLE_OUT, HANDLE_THEN};
use ahash::AHashSet;

/// Base indent of statements inside a function body.
pub const STATEMENT_INDENT: usize = 4;
/// Additional indent per nested block level.
pub const NESTED_INDENT: usize = 2;

/// Walks a function-body subgraph and renders it as indented statement lines.
///
/// The walk follows `"out"` edges linearly and recurses into conditional
/// branches and let scopes. One visited set of node ids is threaded through
/// the whole traversal, branches included, so cyclic wiring terminates and
/// each distinct node is emitted at most once per body.
pub struct StatementEmitter<'a> {
    index: &'a GraphIndex<'a>,
}

impl<'a> StatementEmitter<'a> {
    pub fn new(index: &'a GraphIndex<'a>) -> Self {
        Self { index }
    }

    /// Emits the statement chain starting at `start_id`.
    ///
    /// Pure function of the graph snapshot and the start id. An id that does
    /// not resolve to a node yields an empty body.
    pub fn emit(&self, start_id: &str) -> Vec<String> {
        let mut lines = Vec::new();
        let mut visited = AHashSet::new();
        self.walk(start_id, STATEMENT_INDENT, &mut visited, &mut lines);
        lines
    }

    fn walk(
        &self,
        start_id: &str,
        indent: usize,
        visited: &mut AHashSet<String>,
        lines: &mut Vec<String>,
    ) {
        let mut current = self.index.node(start_id);
        while let Some(node) = current {
            if !visited.insert(node.id.clone()) {
                // Revisited id: cyclic wiring, stop this walk.
                break;
            }

            match NodeKind::parse(node) {
                NodeKind::Let(block) => {
                    push(
                        lines,
                        indent,
                        format!("(let (({} {}))", block.var_name, block.value_expr),
                    );
                    match self.index.first_successor(&node.id, HANDLE_OUT) {
                        Some(body) => {
                            self.walk(&body.id, indent + NESTED_INDENT, visited, lines);
                        }
                        None => push(
                            lines,
                            indent + NESTED_INDENT,
                            ";; Next expressions in this let scope".to_string(),
                        ),
                    }
                    push(lines, indent, ")".to_string());
                    // The let scope consumes the remainder of the branch.
                    return;
                }
                NodeKind::IfElse(block) => {
                    push(lines, indent, format!("(if {}", block.condition));
                    self.branch(&node.id, HANDLE_THEN, "(ok true)", indent, visited, lines);
                    self.branch(&node.id, HANDLE_ELSE, "(ok false)", indent, visited, lines);
                    push(lines, indent, ")".to_string());
                    // Control flow is not merged past a branch.
                    return;
                }
                NodeKind::ReturnOk(block) => {
                    push(lines, indent, format!("(ok {})", block.value));
                    return;
                }
                NodeKind::ReturnErr(block) => {
                    push(lines, indent, format!("(err {})", block.error_code));
                    return;
                }
                NodeKind::Assert(block) => push(
                    lines,
                    indent,
                    format!("(asserts! {} (err {}))", block.condition, block.error_code),
                ),
                NodeKind::VarGet(block) => {
                    push(lines, indent, format!("(var-get {})", block.var_name));
                }
                NodeKind::VarSet(block) => push(
                    lines,
                    indent,
                    format!("(var-set {} {})", block.var_name, block.value),
                ),
                NodeKind::MapGet(block) => push(
                    lines,
                    indent,
                    format!("(map-get? {} {{ id: {} }})", block.map_name, block.key),
                ),
                NodeKind::MapSet(block) => push(
                    lines,
                    indent,
                    format!(
                        "(map-set! {} {{ id: {} }} {{ value: {} }})",
                        block.map_name, block.key, block.value
                    ),
                ),
                NodeKind::MapDelete(block) => push(
                    lines,
                    indent,
                    format!("(map-delete! {} {{ id: {} }})", block.map_name, block.key),
                ),
                NodeKind::ContractCall(block) => {
                    let line = if block.args.is_empty() {
                        format!(
                            "(contract-call? {} {})",
                            block.contract_id, block.function_name
                        )
                    } else {
                        format!(
                            "(contract-call? {} {} {})",
                            block.contract_id, block.function_name, block.args
                        )
                    };
                    push(lines, indent, line);
                }
                // Declaration kinds wired into a body land here as well.
                _ => push(
                    lines,
                    indent,
                    format!(";; Unhandled node type in function body: {}", node.kind),
                ),
            }

            current = self.index.first_successor(&node.id, HANDLE_OUT);
        }
    }

    /// Emits one conditional branch: the connected subgraph wrapped in a
    /// `(begin ...)` form, or the fixed default line when unconnected.
    fn branch(
        &self,
        node_id: &str,
        handle: &str,
        default_line: &str,
        indent: usize,
        visited: &mut AHashSet<String>,
        lines: &mut Vec<String>,
    ) {
        match self.index.first_successor(node_id, handle) {
            Some(start) => {
                push(lines, indent + NESTED_INDENT, "(begin".to_string());
                self.walk(&start.id, indent + 2 * NESTED_INDENT, visited, lines);
                push(lines, indent + NESTED_INDENT, ")".to_string());
            }
            None => push(lines, indent + NESTED_INDENT, default_line.to_string()),
        }
    }
}

fn push(lines: &mut Vec<String>, indent: usize, text: String) {
    lines.push(format!("{}{}", " ".repeat(indent), text));
}
