use std::io;
use thiserror::Error;

use crate::config::ConfigError;
use crate::model::PlantId;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization/Deserialization error (JSON): {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Plant with ID {0} not found")]
    PlantNotFound(PlantId),
}

pub type AppResult<T> = Result<T, AppError>;
