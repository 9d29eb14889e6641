use crate::db::connection::{init_db, Database};
use crate::domain::sites::SiteDirectory;
use crate::listings::{ListingSource, ListingsError};
use crate::router::AppState;
use astra::{Body, Request, Response};
use http::{Method, Uri};
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

pub const EXAMPLE_DOC: &str = r#"{"123 Main St": {"price": 1200, "beds": 2, "baths": 1, "refs": ["https://ygl.is/99333/rental/abc"]}}"#;

/// Serves a fixed document.
pub struct StaticSource(pub String);

impl ListingSource for StaticSource {
    fn fetch(&self) -> Result<String, ListingsError> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

/// Always fails the way an unreachable host does.
pub struct FailingSource;

impl ListingSource for FailingSource {
    fn fetch(&self) -> Result<String, ListingsError> {
        Err(ListingsError::Network("connection refused".to_string()))
    }

    fn describe(&self) -> String {
        "unreachable".to_string()
    }
}

pub fn state_with(source: impl ListingSource + 'static) -> AppState {
    AppState {
        source: Box::new(source),
        sites: SiteDirectory::default(),
        credentials: None,
    }
}

pub fn request(method: Method, path: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = method;
    *req.uri_mut() = path.parse::<Uri>().unwrap();
    req
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body = String::new();
    resp.body_mut().reader().read_to_string(&mut body).unwrap();
    body
}

/// A fresh on-disk database using the production schema
pub fn temp_db(name: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "{name}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy().to_string());
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");
    db
}
