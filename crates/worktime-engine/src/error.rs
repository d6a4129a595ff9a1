//! Error types for worktime-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorktimeError {
    #[error("Invalid calendar configuration: {0}")]
    InvalidConfig(String),

    #[error("No working day found within {0} days of scanning")]
    ScanExhausted(u32),
}

pub type Result<T> = std::result::Result<T, WorktimeError>;
