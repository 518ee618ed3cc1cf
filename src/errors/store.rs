use thiserror::Error;
use std::io;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed credential file: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to replace credential file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

pub type StoreResult<T> = Result<T, StoreError>;
