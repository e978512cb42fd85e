use std::path::PathBuf;
use thiserror::Error;

pub type FlowResult<T> = Result<T, FlowError>;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel file not found (looked in {} location(s))", candidates.len())]
    InputNotFound { candidates: Vec<PathBuf> },

    #[error("Error reading Excel file: {0}")]
    Load(String),
}
