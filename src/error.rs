use thiserror::Error;

/// Errors that can occur when parsing a canvas snapshot from its JSON form.
#[derive(Error, Debug, Clone)]
pub enum CanvasParseError {
    #[error("Failed to parse canvas JSON: {0}")]
    JsonParseError(String),
}

/// Errors that can occur when converting a custom editor format into a
/// blocksmith `GraphDefinition`.
#[derive(Error, Debug, Clone)]
pub enum GraphConversionError {
    #[error("Invalid custom canvas data: {0}")]
    ValidationError(String),
}

/// Errors raised by an external contract checker backend.
///
/// These describe the checker being unable to run at all; an unhappy verdict
/// about the contract text itself is carried in `CompileOutcome`, not here.
#[derive(Error, Debug, Clone)]
pub enum CheckError {
    #[error("External checker is unavailable: {0}")]
    Unavailable(String),

    #[error("External checker returned a malformed response: {0}")]
    MalformedResponse(String),
}
