use thiserror::Error;

pub type LayoutResult<T> = Result<T, LayoutError>;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid canvas geometry: width={width}, padding={padding}")]
    InvalidCanvas { width: f64, padding: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("contract error: {0}")]
    Contract(String),
}
