use crate::domain::listing::ListingParseError;

#[derive(Debug, thiserror::Error)]
pub enum ListingsError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("Could not read {path}: {message}")]
    Io { path: String, message: String },
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
    #[error("Unexpected data shape: expected an object of listings, found {0}")]
    UnexpectedShape(&'static str),
}

impl From<ListingParseError> for ListingsError {
    fn from(err: ListingParseError) -> Self {
        match err {
            ListingParseError::Json(e) => ListingsError::JsonParse(e),
            ListingParseError::Shape(kind) => ListingsError::UnexpectedShape(kind),
        }
    }
}
