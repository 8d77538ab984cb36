use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    #[error("Malformed company directory: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("No se encontró la empresa con id: {id}")]
    CompanyNotFound { id: String },

    #[error("No se pudo determinar el ID del cliente desde la ruta: {path}")]
    MissingClientId { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },
}

pub type Result<T> = std::result::Result<T, RenderError>;
