use thiserror::Error;

/// Errors raised while building or running a pipeline.
///
/// The engine never wraps these: whatever a step returns is what the caller of
/// `pipe` sees.
#[derive(Debug, Error)]
pub enum PipeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("call to undefined method {0}()")]
    UndefinedMethod(String),
    #[error("expected {expected}, found {found}")]
    Type {
        expected: &'static str,
        found: &'static str,
    },
    #[error("{0}")]
    Step(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl PipeError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Failure raised by a user-supplied step.
    pub fn step(msg: impl Into<String>) -> Self {
        Self::Step(msg.into())
    }

    pub fn is_undefined_method(&self) -> bool {
        matches!(self, Self::UndefinedMethod(_))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, PipeError>;
