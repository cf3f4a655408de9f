use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to write results: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write the results table: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
