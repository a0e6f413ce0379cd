use thiserror::Error;

#[derive(Error, Debug)]
pub enum CohortError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),

    /// Matrix lookup with `row >= col` or past the populated row length.
    #[error("Index Out Of Range: no relationship stored for ({row}, {col})")]
    IndexOutOfRange { row: usize, col: usize },

    #[error("No Valid Partition: {0}")]
    NoValidPartition(String),
}

pub type CohortResult<T> = Result<T, CohortError>;
