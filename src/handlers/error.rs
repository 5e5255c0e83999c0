use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::{Error, ErrorKind};
use crate::metrics::GENERATION_FAILURES;
use crate::models::ErrorBody;

// Status code and client message for every error kind. Upstream detail never leaves the server.
pub fn status_and_message(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::MissingInput => (StatusCode::BAD_REQUEST, "No file or topic provided"),
        ErrorKind::InvalidBody => (StatusCode::BAD_REQUEST, "Invalid request body"),
        ErrorKind::BodyTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large"),
        ErrorKind::UpstreamFormat => (StatusCode::INTERNAL_SERVER_ERROR, "AI returned invalid format"),
        ErrorKind::UpstreamCall => (StatusCode::INTERNAL_SERVER_ERROR, "AI generation failed"),
    }
}

// Handler side wrapper so the domain error stays free of HTTP types
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.0.kind();
        GENERATION_FAILURES.with_label_values(&[kind.as_str()]).inc();

        match &self.0 {
            Error::UpstreamFormat { raw, source } => {
                tracing::error!(kind = %kind, error = %source, raw = %raw, "JSON parse failed");
            }
            Error::UpstreamCall(e) => {
                tracing::error!(kind = %kind, error = %e, "AI generation failed");
            }
            Error::MissingInput | Error::InvalidBody(_) | Error::BodyTooLarge(_) => {
                tracing::info!(kind = %kind, error = %self.0, "rejected generate request");
            }
        }

        let (status, message) = status_and_message(kind);
        let body = ErrorBody {
            error: message.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
