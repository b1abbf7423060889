use thiserror::Error;

pub type Result<T> = std::result::Result<T, FigureError>;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FigureError {
    /// The property is zero, negative or NaN.
    #[error("bad property value: {0}")]
    BadProperty(f64),
}
