// responses/json.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, Response, ResponseBuilder};
use serde::Serialize;

/// Indented JSON, readable by any origin.
pub fn json_response<T: Serialize + ?Sized>(status: u16, value: &T) -> ResultResp {
    let body = serde_json::to_string_pretty(value).map_err(|_| ServerError::InternalError)?;

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json; charset=utf-8")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

/// `{"error": "..."}` for failures on the JSON routes.
pub fn json_error_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        ServerError::DbError(_) | ServerError::InternalError => "Internal Server Error".to_string(),
        other => other.to_string(),
    };

    if status >= 500 {
        tracing::error!(status, error = %err, "json request failed");
    }

    json_response(status, &serde_json::json!({ "error": message }))
        .unwrap_or_else(|_| Response::new(Body::from("{\"error\":\"Internal Server Error\"}")))
}
