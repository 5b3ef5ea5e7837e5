//! HTML page handlers: submission form, share page, paste view.

use super::store_submission;
use crate::error::HttpError;
use crate::render::{render_html, AddPage, ErrorPage, SharePage, ViewPage};
use crate::{naming, AppError, AppState, Config};
use askama::Template;
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use minipaste_core::expiration::unix_now;
use serde::Deserialize;

/// Submission form fields.
#[derive(Debug, Default, Deserialize)]
pub struct PasteForm {
    #[serde(default)]
    pub paste: String,
    pub lang: Option<String>,
    pub expire: Option<String>,
}

/// Error rendered as an HTML error page.
#[derive(Debug)]
pub struct PageError(HttpError);

impl From<HttpError> for PageError {
    fn from(value: HttpError) -> Self {
        Self(value)
    }
}

impl From<AppError> for PageError {
    fn from(value: AppError) -> Self {
        Self(HttpError(value))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        self.0.log();
        let status = self.0.status();
        let message = self.0.public_message();
        let page = ErrorPage {
            status: status.as_u16(),
            message: &message,
        };
        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(err) => {
                tracing::error!("Failed to render error page: {}", err);
                (status, message).into_response()
            }
        }
    }
}

fn request_host(headers: &HeaderMap, config: &Config) -> String {
    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| format!("localhost:{}", config.port))
}

/// Redirect to the submission form with `302 Found`.
pub async fn redirect_home() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

/// Render the submission form.
///
/// # Errors
/// Returns an error page if the template fails to render.
pub async fn show_form() -> Result<Html<String>, PageError> {
    Ok(render_html(&AddPage::default())?)
}

/// Store a submitted paste and render its share link.
///
/// An empty `paste` field renders the form again.
///
/// # Errors
/// Returns an error page for oversize pastes (413) and storage failures (500).
pub async fn submit_paste(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<PasteForm>,
) -> Result<Response, PageError> {
    if form.paste.is_empty() {
        return Ok(render_html(&AddPage::default())?.into_response());
    }

    let expiration = state.expiration.resolve(form.expire.as_deref(), unix_now());
    let paste = store_submission(&state, &form.paste, form.lang, expiration)?;
    let host = request_host(&headers, &state.config);
    Ok(render_html(&SharePage {
        host: &host,
        id: &paste.id,
    })?
    .into_response())
}

/// Render a stored paste, or redirect home when it is unavailable.
///
/// # Errors
/// Returns an error page only if the view template fails to render.
pub async fn show_paste(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Response, PageError> {
    if !naming::is_valid_id(&id, state.store.id_length()) {
        return Ok(redirect_home().await);
    }

    let paste = match state.store.load(&id) {
        Ok(paste) => paste,
        Err(err) => {
            if err.is_unavailable() {
                tracing::debug!("Paste {} unavailable: {}", id, err);
            } else {
                tracing::error!("Failed to load paste {}: {}", id, err);
            }
            return Ok(redirect_home().await);
        }
    };

    let host = request_host(&headers, &state.config);
    Ok(render_html(&ViewPage::new(&host, &paste))?.into_response())
}
