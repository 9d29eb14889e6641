use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML response
pub fn error_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        // Internal details stay in the logs.
        ServerError::DbError(_) | ServerError::InternalError => "Internal Server Error".to_string(),
        other => other.to_string(),
    };

    if status >= 500 {
        tracing::error!(status, error = %err, "request failed");
    }

    let mut builder = ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8");

    if matches!(err, ServerError::Unauthorized) {
        builder = builder.header("WWW-Authenticate", "Basic realm=\"rental_board\"");
    }

    builder
        .body(Body::from(error_page(status, &message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
