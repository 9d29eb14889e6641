// src/listings/source.rs
use crate::listings::ListingsError;
use reqwest::blocking::Client;
use std::path::PathBuf;

const USER_AGENT: &str = concat!("rental_board/", env!("CARGO_PKG_VERSION"));

/// Where the listings document comes from. One call to `fetch` is one
/// outbound request (or one file read).
pub trait ListingSource: Send + Sync {
    fn fetch(&self) -> Result<String, ListingsError>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}

pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self, ListingsError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ListingsError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl ListingSource for HttpSource {
    fn fetch(&self) -> Result<String, ListingsError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| ListingsError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ListingsError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        resp.text()
            .map_err(|e| ListingsError::Network(e.to_string()))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ListingSource for FileSource {
    fn fetch(&self) -> Result<String, ListingsError> {
        std::fs::read_to_string(&self.path).map_err(|e| ListingsError::Io {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// `http://` and `https://` locations are fetched over the network,
/// anything else is read from disk.
pub fn source_from_config(location: &str) -> Result<Box<dyn ListingSource>, ListingsError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}
