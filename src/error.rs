use thiserror::Error;

/// Failures a yabai invocation can produce.
///
/// Parse and schema failures are deliberately distinct so callers can tell
/// "stdout was not JSON" apart from "valid JSON, wrong shape" (e.g. a yabai
/// version skew renaming fields).
#[derive(Debug, Error)]
pub enum Error {
    /// The yabai binary could not be started (not installed, not on PATH).
    #[error("failed to spawn yabai: {0}")]
    Spawn(#[source] std::io::Error),

    /// yabai ran and rejected the command. Carries the captured stderr text
    /// verbatim as the message.
    #[error("{0}")]
    CommandFailed(String),

    /// Query output was not valid JSON.
    #[error("yabai output is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// Query output was valid JSON but did not match the expected shape.
    #[error("yabai output does not match the {entity} schema")]
    SchemaMismatch { entity: &'static str },

    /// The operation is deliberately unimplemented.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
