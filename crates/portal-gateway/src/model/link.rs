use crate::error::AppError;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header;
use axum::Form;
use serde::{Deserialize, Serialize};

/// Form fields accepted by the write endpoints.
///
/// Absent fields decode as empty strings; the registry rejects them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LinkForm {
    pub code: String,
    pub url: String,
}

impl LinkForm {
    fn set(&mut self, name: &str, value: String) {
        match name {
            "code" => self.code = value,
            "url" => self.url = value,
            _ => {}
        }
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = LinkForm::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::MalformedForm(e.body_text()))?
        {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            let value = field
                .text()
                .await
                .map_err(|e| AppError::MalformedForm(e.body_text()))?;
            form.set(&name, value);
        }
        Ok(form)
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"))
}

/// Accepts both url-encoded bodies and the `multipart/form-data` bodies
/// that browsers send for `FormData`.
impl<S> FromRequest<S> for LinkForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_multipart(&req) {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::MalformedForm(e.body_text()))?;
            return Self::from_multipart(multipart).await;
        }

        let Form(form) = Form::<LinkForm>::from_request(req, state)
            .await
            .map_err(|e| AppError::MalformedForm(e.body_text()))?;
        Ok(form)
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
