use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV generation failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer could not be flushed: {0}")]
    Flush(String),

    #[error("export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl<W> From<csv::IntoInnerError<W>> for ExportError {
    fn from(e: csv::IntoInnerError<W>) -> Self {
        ExportError::Flush(e.error().to_string())
    }
}
