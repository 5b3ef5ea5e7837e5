//! Askama page templates.
//!
//! Paste content is stored HTML-escaped and is emitted with `|safe`; every
//! other value goes through askama's auto-escaping.

use crate::error::HttpError;
use askama::Template;
use axum::response::Html;
use minipaste_core::models::language::{supported_languages, LanguageInfo};
use minipaste_core::Paste;

/// Lifetime choice offered by the submission form.
pub struct LifetimeOption {
    pub secs: i64,
    pub label: &'static str,
}

const LIFETIME_OPTIONS: [(i64, &str); 3] =
    [(3_600, "1 hour"), (86_400, "1 day"), (604_800, "1 week")];

#[derive(Template)]
#[template(path = "add.html")]
pub struct AddPage {
    pub languages: Vec<LanguageInfo>,
    pub lifetimes: Vec<LifetimeOption>,
}

impl Default for AddPage {
    fn default() -> Self {
        Self {
            languages: supported_languages(),
            lifetimes: LIFETIME_OPTIONS
                .into_iter()
                .map(|(secs, label)| LifetimeOption { secs, label })
                .collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "share.html")]
pub struct SharePage<'a> {
    pub host: &'a str,
    pub id: &'a str,
}

#[derive(Template)]
#[template(path = "view.html")]
pub struct ViewPage<'a> {
    pub host: &'a str,
    pub paste: &'a Paste,
    pub language_name: &'static str,
    pub brush: &'static str,
}

impl<'a> ViewPage<'a> {
    pub fn new(host: &'a str, paste: &'a Paste) -> Self {
        Self {
            host,
            paste,
            language_name: paste.language.display_name(),
            brush: paste.language.brush(),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage<'a> {
    pub status: u16,
    pub message: &'a str,
}

/// Render a template into an HTML response body.
///
/// # Errors
/// Returns an internal [`HttpError`] when rendering fails.
pub fn render_html<T: Template>(template: &T) -> Result<Html<String>, HttpError> {
    Ok(Html(template.render()?))
}
