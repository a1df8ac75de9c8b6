use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Malformed expectation spec: {0}")]
    MalformedSpec(String),

    #[error("Invalid query component: {0}")]
    InvalidQuery(String),

    #[error("Object not found in the RIPE database: {0}")]
    ObjectNotFound(String),

    #[error("RIPE database lookup failed: {0}")]
    LookupError(String),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CheckError>;
