//! Common test utilities for building graph definitions.
use blocksmith::prelude::*;

/// Shorthand for a bare node with no data fields.
#[allow(dead_code)]
pub fn node(id: &str, kind: &str) -> NodeDefinition {
    NodeDefinition::new(id, kind)
}

/// Shorthand for an edge on the given source handle.
#[allow(dead_code)]
pub fn edge(source: &str, handle: &str, target: &str) -> EdgeDefinition {
    EdgeDefinition::new(source, handle, target)
}

/// Creates a small but complete counter contract:
/// a data variable, a read-only getter and a public increment function.
#[allow(dead_code)]
pub fn create_counter_graph() -> GraphDefinition {
    GraphDefinition {
        nodes: vec![
            node("m1", "module").with_field("moduleName", "counter-contract"),
            node("v1", "dataVariable")
                .with_field("name", "counter")
                .with_field("type", "uint")
                .with_field("initialValue", "u0"),
            node("f1", "readOnlyFunction").with_field("name", "get-counter"),
            node("s1", "varGet").with_field("varName", "counter"),
            node("f2", "publicFunction")
                .with_field("name", "increment")
                .with_field("returnType", "(response bool uint)"),
            node("s2", "varSet")
                .with_field("varName", "counter")
                .with_field("value", "(+ (var-get counter) u1)"),
            node("s3", "returnOk").with_field("value", "true"),
        ],
        edges: vec![
            edge("m1", "out", "v1"),
            edge("m1", "out", "f1"),
            edge("m1", "out", "f2"),
            edge("f1", "out", "s1"),
            edge("f2", "out", "s2"),
            edge("s2", "out", "s3"),
        ],
    }
}

/// The exact text `create_counter_graph` renders to.
#[allow(dead_code)]
pub const COUNTER_CONTRACT: &str = "\
(define-data-var counter uint u0)

(define-read-only (get-counter)
  (begin
    (var-get counter)
  )
)

(define-public (increment) (response bool uint)
  (begin
    (var-set counter (+ (var-get counter) u1))
    (ok true)
  )
)
";

/// A function whose body chain wires back onto an earlier statement.
#[allow(dead_code)]
pub fn create_cyclic_graph() -> GraphDefinition {
    GraphDefinition {
        nodes: vec![
            node("m1", "module"),
            node("f1", "publicFunction").with_field("name", "spin"),
            node("s1", "varGet").with_field("varName", "first"),
            node("s2", "varGet").with_field("varName", "second"),
        ],
        edges: vec![
            edge("m1", "out", "f1"),
            edge("f1", "out", "s1"),
            edge("s1", "out", "s2"),
            edge("s2", "out", "s1"),
        ],
    }
}

/// Parenthesis balance over generated text; comments carry no parens so a
/// plain count is exact.
#[allow(dead_code)]
pub fn parens_balanced(text: &str) -> bool {
    text.matches('(').count() == text.matches(')').count()
}
