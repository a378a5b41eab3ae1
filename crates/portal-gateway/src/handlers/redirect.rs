use crate::error::{redirect_response, Result};
use crate::state::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use portal_resolver::{MissReason, RedirectStatus, Resolution};

/// Handles every path that is not an API route.
pub async fn redirect_handler(State(state): State<AppState>, uri: Uri) -> Result<Response> {
    let decoded = urlencoding::decode_binary(uri.path().as_bytes());
    let path = String::from_utf8_lossy(&decoded);

    match state.resolver().resolve(&path).await? {
        Resolution::Redirect(target) => redirect_response(&target.url, target.status),
        Resolution::Miss(MissReason::EmptyPath) => {
            redirect_response(&state.routes().ui_entry, RedirectStatus::Temporary)
        }
        Resolution::Miss(MissReason::CodeNotFound(code)) => match &state.routes().error_page {
            Some(page) => redirect_response(
                &error_page_location(page, &code),
                RedirectStatus::Temporary,
            ),
            None => Ok(not_found_text(&code)),
        },
    }
}

fn error_page_location(page: &str, code: &str) -> String {
    let separator = if page.contains('?') { '&' } else { '?' };
    format!("{page}{separator}code={}", urlencoding::encode(code))
}

fn not_found_text(code: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        format!("short code not found: {code}"),
    )
        .into_response()
}
