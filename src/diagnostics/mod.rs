use crate::error::CheckError;
use serde::{Deserialize, Serialize};

pub mod lint;

pub use lint::{LocalLinter, validate};

/// Diagnostics returned by a contract validator. Advisory only: nothing in
/// here ever mutates the graph or the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// True when the validator raised neither errors nor warnings.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Verdict of an external compile/check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompileStatus {
    Success,
    Error,
}

/// The wire shape an external compiler service replies with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileOutcome {
    pub status: CompileStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler_errors: Option<String>,
}

/// A validator backend producing rule-level diagnostics for contract text.
///
/// The bundled [`LocalLinter`] runs the rule set in-process; an HTTP client
/// wrapping a remote lint service plugs in through the same seam.
pub trait ContractValidator {
    fn validate(&self, source: &str) -> Result<ValidationReport, CheckError>;
}

/// A checker backend handing contract text to a real compiler toolchain.
///
/// Not implemented in this crate: the surrounding application wires this to
/// its compiler service and surfaces the outcome as user-facing diagnostics.
pub trait ContractChecker {
    fn check(&self, source: &str) -> Result<CompileOutcome, CheckError>;
}
