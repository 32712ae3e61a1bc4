//! Unit tests for kind parsing, parameter handling, diagnostics shapes and
//! the lint rules.
mod common;
use common::*;

use blocksmith::generator::parsing::{DataVariableBlock, NodeKind};
use blocksmith::prelude::*;

#[test]
fn test_node_kind_parses_typed_fields() {
    let definition = node("v1", "dataVariable")
        .with_field("name", "counter")
        .with_field("type", "uint")
        .with_field("initialValue", "u0");
    assert_eq!(
        NodeKind::parse(&definition),
        NodeKind::DataVariable(DataVariableBlock {
            name: "counter".to_string(),
            ty: "uint".to_string(),
            initial_value: "u0".to_string(),
        })
    );
}

#[test]
fn test_missing_fields_take_default_literals() {
    let NodeKind::Constant(block) = NodeKind::parse(&node("c1", "constant")) else {
        panic!("expected a constant kind");
    };
    assert_eq!(block.name, "MY_CONSTANT");
    assert_eq!(block.value, "u100");

    let NodeKind::UseTrait(block) = NodeKind::parse(&node("t1", "useTrait")) else {
        panic!("expected a useTrait kind");
    };
    assert_eq!(
        block.trait_id,
        "SP2J6ZY48GV1EZ5V2V5RB9MP66NW8H1F2K7DCRGY5.trait-name"
    );
}

#[test]
fn test_empty_string_field_counts_as_absent() {
    let definition = node("s1", "varGet").with_field("varName", "");
    let NodeKind::VarGet(block) = NodeKind::parse(&definition) else {
        panic!("expected a varGet kind");
    };
    assert_eq!(block.var_name, "my-var");
}

#[test]
fn test_unrecognized_tag_parses_to_unknown() {
    assert_eq!(
        NodeKind::parse(&node("x1", "quantumBlock")),
        NodeKind::Unknown("quantumBlock".to_string())
    );
}

#[test]
fn test_function_param_parsing() {
    let parse = |params: &str| -> Vec<Param> {
        let definition = node("f1", "publicFunction").with_field("params", params);
        match NodeKind::parse(&definition) {
            NodeKind::Function(block) => block.params,
            other => panic!("expected a function kind, got {other:?}"),
        }
    };

    let pair = |name: &str, ty: &str| Param {
        name: name.to_string(),
        ty: ty.to_string(),
    };

    assert_eq!(
        parse("amount uint, to principal"),
        vec![pair("amount", "uint"), pair("to", "principal")]
    );
    // One-word pairs default to the implicit numeric type.
    assert_eq!(parse("amount"), vec![pair("amount", "uint")]);
    // Multi-word type tails join back into one token.
    assert_eq!(
        parse("entry (optional uint)"),
        vec![pair("entry", "(optional uint)")]
    );
    // Stray separators and whitespace are tolerated.
    assert_eq!(
        parse(" amount   uint ,, to principal , "),
        vec![pair("amount", "uint"), pair("to", "principal")]
    );
    assert_eq!(parse(""), vec![]);
}

#[test]
fn test_function_visibility_forms() {
    assert_eq!(FunctionVisibility::Public.define_keyword(), "define-public");
    assert_eq!(
        FunctionVisibility::ReadOnly.define_keyword(),
        "define-read-only"
    );
    assert_eq!(
        FunctionVisibility::Private.define_keyword(),
        "define-private"
    );
    assert!(FunctionVisibility::Public.annotates_return_type());
    assert!(FunctionVisibility::Private.annotates_return_type());
    assert!(!FunctionVisibility::ReadOnly.annotates_return_type());
}

#[test]
fn test_function_default_names_per_visibility() {
    for (kind, expected) in [
        ("publicFunction", "my-public-function"),
        ("readOnlyFunction", "my-read-only-function"),
        ("privateFunction", "my-private-function"),
    ] {
        match NodeKind::parse(&node("f1", kind)) {
            NodeKind::Function(block) => assert_eq!(block.name, expected),
            other => panic!("expected a function kind, got {other:?}"),
        }
    }
}

#[test]
fn test_return_type_has_no_default() {
    let NodeKind::Function(block) = NodeKind::parse(&node("f1", "publicFunction")) else {
        panic!("expected a function kind");
    };
    assert_eq!(block.return_type, None);

    let definition = node("f2", "publicFunction").with_field("returnType", "(response uint uint)");
    let NodeKind::Function(block) = NodeKind::parse(&definition) else {
        panic!("expected a function kind");
    };
    assert_eq!(block.return_type.as_deref(), Some("(response uint uint)"));
}

#[test]
fn test_error_display() {
    let err = CanvasParseError::JsonParseError("expected value at line 1".to_string());
    assert!(err.to_string().contains("canvas JSON"));
    assert!(err.to_string().contains("line 1"));

    let err = GraphConversionError::ValidationError("duplicate block id".to_string());
    assert!(err.to_string().contains("duplicate block id"));

    let err = CheckError::Unavailable("connection refused".to_string());
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn test_compile_outcome_wire_shape() {
    let outcome = CompileOutcome {
        status: CompileStatus::Error,
        compiler_errors: Some("unresolved name".to_string()),
    };
    let json = serde_json::to_string(&outcome).unwrap();
    assert_eq!(
        json,
        r#"{"status":"error","compilerErrors":"unresolved name"}"#
    );

    let parsed: CompileOutcome = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
    assert_eq!(parsed.status, CompileStatus::Success);
    assert_eq!(parsed.compiler_errors, None);
}

#[test]
fn test_validation_report_is_clean() {
    assert!(ValidationReport::default().is_clean());
    let report = ValidationReport {
        errors: vec![],
        warnings: vec!["something".to_string()],
    };
    assert!(!report.is_clean());
}

#[test]
fn test_lint_requires_a_define_statement() {
    let report = validate(";; just a comment");
    assert!(
        report
            .errors
            .iter()
            .any(|e| e.contains("at least one define"))
    );
}

#[test]
fn test_lint_detects_unbalanced_parentheses() {
    let report = validate("(define-constant X (ok true)");
    assert!(report.errors.iter().any(|e| e.contains("Unbalanced")));
}

#[test]
fn test_lint_rejects_bare_numeric_literals() {
    let report = validate("(define-constant X (ok 5))");
    assert!(report.errors.iter().any(|e| e.contains("prefixed with 'u'")));

    let report = validate("(define-constant X (err 5))");
    assert!(
        report
            .errors
            .iter()
            .any(|e| e.contains("unsigned integers"))
    );
}

#[test]
fn test_lint_rejects_float_and_negative_literals() {
    let report = validate("(define-constant PI 3.14)");
    assert!(report.errors.iter().any(|e| e.contains("Floating point")));

    let report = validate("(define-constant LOW (ok u1)) ;; offset -5");
    assert!(
        report
            .errors
            .iter()
            .any(|e| e.contains("Negative numbers"))
    );
}

#[test]
fn test_lint_requires_response_type_on_public_functions() {
    let source = "(define-public (act)\n  (begin\n    (ok true)\n  )\n)\n";
    let report = validate(source);
    assert!(
        report
            .errors
            .iter()
            .any(|e| e.contains("must return a response type"))
    );
}

#[test]
fn test_lint_detects_response_bool_mismatch() {
    let source = "(define-public (act) (response bool uint)\n  (begin\n    (ok u5)\n  )\n)\n";
    let report = validate(source);
    assert!(
        report
            .errors
            .iter()
            .any(|e| e.contains("expected bool, got uint"))
    );
}

#[test]
fn test_lint_rejects_reserved_public_function_names() {
    let source = "(define-public (let (x uint)) (response bool uint)\n  (begin\n    (ok true)\n  )\n)\n";
    let report = validate(source);
    assert!(
        report
            .errors
            .iter()
            .any(|e| e.contains("Reserved keyword \"let\""))
    );
}

#[test]
fn test_lint_bad_practice_warnings() {
    let source =
        "(define-read-only (peek)\n  (begin\n    (print (default-to u0 (unwrap-panic none)))\n  )\n)\n";
    let report = validate(source);
    assert!(report.errors.is_empty(), "advisory only: {:?}", report.errors);
    assert_eq!(report.warnings.len(), 3);
}

#[test]
fn test_local_linter_backend_never_fails() {
    let linter = LocalLinter;
    let report = linter.validate(COUNTER_CONTRACT).unwrap();
    assert!(report.errors.is_empty());
}
