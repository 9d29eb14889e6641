use crate::errors::ServerError;

#[derive(Debug, thiserror::Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("HTML parse error: {0}")]
    HtmlParse(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Store error: {0}")]
    Db(String),
}

impl From<ServerError> for ScraperError {
    fn from(err: ServerError) -> Self {
        ScraperError::Db(err.to_string())
    }
}
