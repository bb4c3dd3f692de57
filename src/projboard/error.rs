use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    /// Markup the views rely on is absent. Start-up cannot continue.
    #[error("Element not found: {0}")]
    MissingElement(String),

    #[error("Template not found: {0}")]
    MissingTemplate(String),

    /// A store notification arrived while the document was borrowed.
    #[error("Document is busy")]
    DocumentBusy,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(String),

    #[error("{0}")]
    Session(String),
}

pub type Result<T> = std::result::Result<T, BoardError>;
