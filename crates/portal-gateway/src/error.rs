use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use portal_core::{ErrorKind, RegistryError};
use portal_resolver::RedirectStatus;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

pub type Result<T> = std::result::Result<T, AppError>;

/// Shown instead of the real cause when storage fails.
const STORAGE_FAILURE_MESSAGE: &str = "internal storage error";

const UNUSABLE_TARGET_MESSAGE: &str = "stored redirect target cannot be used";

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("malformed form body: {0}")]
    MalformedForm(String),
    #[error("API path does not exist: {0}")]
    UnknownApiPath(String),
    #[error("stored redirect target is not a valid header value: {0:?}")]
    InvalidRedirectTarget(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Registry(e) => e.kind(),
            AppError::MalformedForm(_) => ErrorKind::InvalidInput,
            AppError::UnknownApiPath(_) => ErrorKind::NotFound,
            AppError::InvalidRedirectTarget(_) => ErrorKind::StorageUnavailable,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub kind: ErrorKind,
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::StorageUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Builds the JSON error response for a kind. Every error path goes
/// through here.
pub fn error_response(kind: ErrorKind, message: impl Into<String>) -> Response {
    let body = ErrorBody {
        error: message.into(),
        kind,
    };
    (status_for(kind), Json(body)).into_response()
}

/// Builds a redirect response. Used for resolved codes as well as the UI
/// entry and error page redirects.
pub fn redirect_response(location: &str, status: RedirectStatus) -> Result<Response> {
    let location = HeaderValue::from_bytes(location.as_bytes())
        .map_err(|_| AppError::InvalidRedirectTarget(location.to_string()))?;
    let status = StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::FOUND);

    Ok((status, [(header::LOCATION, location)]).into_response())
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        match &self {
            // the row is readable, only its url cannot be sent back
            AppError::InvalidRedirectTarget(_) => {
                warn!(error = %self, "unusable redirect target");
                error_response(kind, UNUSABLE_TARGET_MESSAGE)
            }
            _ if kind == ErrorKind::StorageUnavailable => {
                error!(error = %self, "storage failure");
                error_response(kind, STORAGE_FAILURE_MESSAGE)
            }
            _ => error_response(kind, self.to_string()),
        }
    }
}
