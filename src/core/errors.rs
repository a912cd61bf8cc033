use thiserror::Error;

#[derive(Error, Debug)]
pub enum TarjetaError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("CSV error: {0}")]
    Csv(Box<csv::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("word list is missing required column '{0}'")]
    MissingColumn(String),

    #[error("master catalog unavailable: {0}")]
    DataUnavailable(String),

    #[error("invalid study range: start must be at least 1 and end must not be below start")]
    InvalidRange,
}

impl From<std::io::Error> for TarjetaError {
    fn from(error: std::io::Error) -> Self {
        TarjetaError::Io(Box::new(error))
    }
}

impl From<csv::Error> for TarjetaError {
    fn from(error: csv::Error) -> Self {
        TarjetaError::Csv(Box::new(error))
    }
}
