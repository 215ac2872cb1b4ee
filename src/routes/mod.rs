//! HTTP handlers exposed to the front-end shell.

use actix_web::HttpResponse;
use tera::{Context, Tera};

pub mod api;
pub mod partials;

/// Renders `template` or answers `500` when rendering fails.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
