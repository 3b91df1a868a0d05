use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResonatorError {
    #[error(
        "Optimization did not converge after {iterations} anneal steps \
         (barrier strength {barrier_strength:e})"
    )]
    NotConverged {
        iterations: usize,
        barrier_strength: f64,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ResonatorResult<T> = Result<T, ResonatorError>;
