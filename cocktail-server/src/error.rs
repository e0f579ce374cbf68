use cocktail::errors::RecipeError;
use thiserror::Error;

/// Failures while starting or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open catalog: {0}")]
    Catalog(#[from] RecipeError),
}

pub type Result<T> = std::result::Result<T, ServerError>;
