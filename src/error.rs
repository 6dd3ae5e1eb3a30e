use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("server error: {0}")]
    Server(String),
}

impl OptimizeError {
    pub fn validation(message: impl Into<String>) -> Self {
        OptimizeError::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, OptimizeError::Validation(_))
    }
}

pub type OptimizeResult<T> = Result<T, OptimizeError>;
