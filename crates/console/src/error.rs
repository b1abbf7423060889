use figures_store::FigureError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CommandError>;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("invalid figure type: {0}")]
    InvalidFigureType(String),

    #[error("invalid property value: {0}")]
    InvalidPropertyValue(String),

    #[error(transparent)]
    BadProperty(#[from] FigureError),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl CommandError {
    /// Everything except a broken console is reported and the session goes on.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
