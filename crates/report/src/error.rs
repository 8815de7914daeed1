use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("pdf error: {0}")]
    Pdf(#[from] genpdf::error::Error),
    #[error("csv error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("export finalize error: {0}")]
    Finalize(String),
}
