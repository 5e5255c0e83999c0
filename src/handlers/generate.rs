use axum::Json;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;

use super::error::ApiError;
use crate::error::Error;
use crate::metrics::REQUEST_TOTAL;
use crate::models::{GenerationRequest, StudyNotes};
use crate::resolver::resolve_subject;
use crate::state::AppState;

pub async fn generate_handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<StudyNotes>, ApiError> {
    REQUEST_TOTAL.inc();

    let input = read_generation_request(request).await?;
    let subject = resolve_subject(&input)?;
    tracing::info!(
        subject = %subject,
        from_file = input.uploaded_filename.as_deref() == Some(subject.as_str()),
        "generating study notes"
    );

    let notes = state.gateway.generate(&subject).await?;
    Ok(Json(notes))
}

// JSON and multipart bodies are understood, anything else counts as an empty request
async fn read_generation_request(request: Request) -> Result<GenerationRequest, Error> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, &())
            .await
            .map_err(|e| body_error(e.status(), e))?;
        read_multipart(multipart).await
    } else if content_type.starts_with("application/json") {
        let Json(body) = Json::<GenerationRequest>::from_request(request, &())
            .await
            .map_err(|e| body_error(e.status(), e))?;
        Ok(body)
    } else {
        Ok(GenerationRequest::default())
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<GenerationRequest, Error> {
    let mut request = GenerationRequest::default();

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| body_error(e.status(), e))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("topic") => {
                let topic = field.text().await.map_err(|e| body_error(e.status(), e))?;
                request.topic = Some(topic);
            }
            Some("file") => {
                let Some(filename) = field.file_name().map(base_name) else {
                    continue;
                };
                // only the name is used, the bytes are dropped as they arrive
                let mut size = 0;
                while let Some(chunk) = field.chunk().await.map_err(|e| body_error(e.status(), e))? {
                    size += chunk.len();
                }
                tracing::debug!(filename = %filename, size, "discarded uploaded file");
                request.uploaded_filename.get_or_insert(filename);
            }
            _ => {}
        }
    }

    Ok(request)
}

// Rejections carry the status axum would have used, keep "too large" apart from "malformed"
fn body_error(status: StatusCode, err: impl std::fmt::Display) -> Error {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        Error::body_too_large(err)
    } else {
        Error::invalid_body(err)
    }
}

// Clients may send a path, only the last segment is the file's name
fn base_name(filename: &str) -> String {
    filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename)
        .to_string()
}
