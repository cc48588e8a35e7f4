use thiserror::Error;

/// Rejections raised while turning a request body into simulation parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid parameter type. All parameters must be numbers.")]
    InvalidType { field: &'static str },

    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}

/// Rejections raised while building a time grid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("Parameter {field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("delta_t must be positive (got {0})")]
    NonPositiveStep(f64),

    #[error("t_end ({t_end}) must not be earlier than t_start ({t_start})")]
    InvertedSpan { t_start: f64, t_end: f64 },

    #[error("Time grid would hold {points} points, the limit is {limit}")]
    TooLarge { points: f64, limit: usize },
}
