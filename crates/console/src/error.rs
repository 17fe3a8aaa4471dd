use thiserror::Error;

/// Failures that end a console session.
///
/// Everything the user can get wrong is recovered inside the session; only
/// broken stdin/stdout surfaces here.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("console io failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
