// errors.rs
use crate::listings::ListingsError;

/// Errors originating from either the server logic
/// (routing, missing resources, auth) or downstream layers (DB, listings).
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Database Error: {0}")]
    DbError(String),
    #[error("Listings unavailable: {0}")]
    Listings(#[from] ListingsError),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Unauthorized => 401,
            ServerError::Listings(_) => 502,
            ServerError::DbError(_) | ServerError::InternalError => 500,
        }
    }
}
