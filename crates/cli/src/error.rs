//! Failures of a `hashtone` invocation and the exit code each one maps to.
//!
//! | code | source |
//! |------|--------|
//! | 2    | clap argument parsing (before `run`) |
//! | 10   | rejected by the library: arity, pattern name, parameter, size |
//! | 11   | recipe file unreadable or PNG not written |
//! | 12   | recipe file or `--params` is not valid JSON for its purpose |
//! | 13   | JSON output could not be encoded |

use hashtone_core::HashtoneError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// The library refused the request.
    #[error(transparent)]
    Rejected(HashtoneError),

    /// Reading the recipe or writing the PNG failed.
    #[error("{0}")]
    Io(String),

    /// The `--recipe` file parsed as JSON but not as a recipe, or not at all.
    #[error("invalid recipe {path}: {reason}")]
    Recipe { path: String, reason: String },

    /// The `--params` argument was not a JSON document.
    #[error("invalid --params JSON: {0}")]
    Params(serde_json::Error),

    /// Encoding `--json` output failed.
    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Rejected(_) => 10,
            CliError::Io(_) => 11,
            CliError::Recipe { .. } | CliError::Params(_) => 12,
            CliError::Output(_) => 13,
        }
    }
}

impl From<HashtoneError> for CliError {
    fn from(e: HashtoneError) -> Self {
        match e {
            HashtoneError::Io(msg) => CliError::Io(msg),
            HashtoneError::InvalidRecipe { path, reason } => CliError::Recipe { path, reason },
            other => CliError::Rejected(other),
        }
    }
}
