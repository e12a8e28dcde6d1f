use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoRosterError {
    #[error("config error: {0}")]
    Config(String),

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("roster contains no records: {0}")]
    EmptyRoster(String),

    #[error("invalid cross-reference cache: {0}")]
    InvalidCache(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("image load error: {0}")]
    ImageLoad(String),

    #[error("PDF generation error: {0}")]
    PdfGeneration(String),
}

pub type Result<T> = std::result::Result<T, PhotoRosterError>;
