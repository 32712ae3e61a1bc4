use super::{ContractValidator, ValidationReport};
use crate::error::CheckError;
use regex::Regex;
use std::sync::LazyLock;

/// Names that must not be redefined as public functions.
const RESERVED_WORDS: [&str; 11] = [
    "define",
    "begin",
    "if",
    "ok",
    "err",
    "map-get?",
    "unwrap!",
    "unwrap-panic",
    "print",
    "try!",
    "let",
];

static OPERATOR_MISUSE: LazyLock<Regex> = LazyLock::new(|| pattern(r">[a-zA-Z]"));
static OK_STRING: LazyLock<Regex> = LazyLock::new(|| pattern(r#"\(ok\s*".*"\)"#));
static OK_UINT: LazyLock<Regex> = LazyLock::new(|| pattern(r"\(ok\s*u\d+\)"));
static ERR_STRING: LazyLock<Regex> = LazyLock::new(|| pattern(r#"\(err\s*".*"\)"#));
static OK_BARE_NUMBER: LazyLock<Regex> = LazyLock::new(|| pattern(r"\(ok\s+\d+\)"));
static ERR_BARE_NUMBER: LazyLock<Regex> = LazyLock::new(|| pattern(r"\(err\s+\d+\)"));
static FLOAT_LITERAL: LazyLock<Regex> = LazyLock::new(|| pattern(r"[+\-]?\d+\.\d+"));
static NEGATIVE_LITERAL: LazyLock<Regex> = LazyLock::new(|| pattern(r"-\d+"));
static RESERVED_PUBLIC_NAME: LazyLock<Regex> = LazyLock::new(|| {
    pattern(
        r"\(define-public\s*\((define|begin|if|ok|err|map-get\?|unwrap!|unwrap-panic|print|try!|let)\s",
    )
});

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("lint pattern compiles")
}

/// Runs the rule-based validator over contract source text.
///
/// The rules mirror the reference lint service: structural sanity, response
/// type discipline, uint literal discipline, reserved names, and a handful of
/// bad-practice warnings. Purely advisory; generation never consults this.
pub fn validate(source: &str) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if !source.contains("(define") {
        errors.push("Contract must contain at least one define statement.".to_string());
    }

    let open_count = source.matches('(').count();
    let close_count = source.matches(')').count();
    if open_count != close_count {
        errors.push("Unbalanced parentheses detected.".to_string());
    }

    if OPERATOR_MISUSE.is_match(source) {
        errors.push("Invalid operator usage. Use (> var uX) instead of >var uX.".to_string());
    }

    if source.contains("(define-public") && !source.contains("(response ") {
        errors.push("Public functions must return a response type.".to_string());
    }

    if source.contains("(response bool") {
        if OK_STRING.is_match(source) {
            errors.push("Response type mismatch: expected bool, got string.".to_string());
        }
        if OK_UINT.is_match(source) {
            errors.push("Response type mismatch: expected bool, got uint.".to_string());
        }
    }

    if ERR_STRING.is_match(source) {
        errors.push("Error values must be uint (e.g., (err u100)), not strings.".to_string());
    }

    if OK_BARE_NUMBER.is_match(source) {
        errors.push("Numeric constants must be prefixed with 'u'.".to_string());
    }
    if ERR_BARE_NUMBER.is_match(source) {
        errors.push("Error codes must be unsigned integers (e.g., (err u100)).".to_string());
    }
    if FLOAT_LITERAL.is_match(source) {
        errors.push("Floating point numbers are not supported in Clarity.".to_string());
    }
    if NEGATIVE_LITERAL.is_match(source) {
        errors.push("Negative numbers are not supported in Clarity.".to_string());
    }

    let reserved_hits: Vec<&str> = RESERVED_PUBLIC_NAME
        .captures_iter(source)
        .filter_map(|captures| captures.get(1))
        .map(|m| m.as_str())
        .collect();
    for word in RESERVED_WORDS {
        if reserved_hits.contains(&word) {
            errors.push(format!(
                "Reserved keyword \"{}\" cannot be used as a variable or function name.",
                word
            ));
        }
    }

    if source.contains("print") {
        warnings.push("Avoid using print in production contracts.".to_string());
    }
    if source.contains("unwrap-panic") {
        warnings.push("unwrap-panic may crash your contract, avoid using it.".to_string());
    }
    if source.contains("default-to") {
        warnings.push("Consider handling errors explicitly instead of default-to.".to_string());
    }

    ValidationReport { errors, warnings }
}

/// In-process validator backend running [`validate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalLinter;

impl ContractValidator for LocalLinter {
    fn validate(&self, source: &str) -> Result<ValidationReport, CheckError> {
        Ok(validate(source))
    }
}
