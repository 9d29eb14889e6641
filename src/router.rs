use crate::auth::basic::require_basic_auth;
use crate::config::Credentials;
use crate::domain::listing::ListingSet;
use crate::domain::sites::SiteDirectory;
use crate::errors::ServerError;
use crate::listings::{load_and_render, ListingSource};
use crate::responses::{error_response, html_response, json_error_response, json_response, ResultResp};
use crate::templates;
use astra::{Request, Response};
use std::io::Read;

const MAX_FORM_BYTES: u64 = 64 * 1024;

/// Everything a request handler may look at. Shared read-only across workers.
pub struct AppState {
    pub source: Box<dyn ListingSource>,
    pub sites: SiteDirectory,
    pub credentials: Option<Credentials>,
}

pub fn handle(req: Request, state: &AppState) -> Response {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    tracing::debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/listings") => listings_json(state).unwrap_or_else(json_error_response),
        ("GET", "/sites") => json_response(200, &state.sites).unwrap_or_else(json_error_response),
        ("GET", "/ping") => ping(&req, state).unwrap_or_else(json_error_response),
        _ => handle_page(req, &method, &path, state).unwrap_or_else(error_response),
    }
}

fn handle_page(req: Request, method: &str, path: &str, state: &AppState) -> ResultResp {
    match (method, path) {
        ("GET", "/") => home(state),
        ("GET", "/settings") => html_response(templates::pages::settings_page(None)),
        ("POST", "/settings") => save_settings(req),
        _ => Err(ServerError::NotFound),
    }
}

fn home(state: &AppState) -> ResultResp {
    let result = load_and_render(state.source.as_ref(), &state.sites);

    match &result {
        Ok(rendered) => tracing::info!(count = rendered.count, "rendered listings"),
        Err(e) => tracing::error!(
            source = %state.source.describe(),
            error = %e,
            "❌ could not load listings"
        ),
    }

    html_response(templates::pages::home_page(&result))
}

fn listings_json(state: &AppState) -> ResultResp {
    let text = state.source.fetch()?;
    let set = ListingSet::from_json(&text).map_err(|e| ServerError::Listings(e.into()))?;
    json_response(200, &set)
}

fn ping(req: &Request, state: &AppState) -> ResultResp {
    require_basic_auth(req, state.credentials.as_ref())?;
    json_response(200, &serde_json::json!({ "pong": true }))
}

fn save_settings(req: Request) -> ResultResp {
    let mut body = String::new();
    req.into_body()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable form body: {e}")))?;

    let fields = parse_form(&body);
    for (key, value) in &fields {
        tracing::info!("{key}: {value}");
    }

    html_response(templates::pages::settings_page(Some(fields.len())))
}

/// Decode an `application/x-www-form-urlencoded` body, keeping field order.
pub fn parse_form(body: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(body.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}
