//! HTML fragments swapped into pages by the front-end.

use actix_web::{HttpRequest, Responder, get, web};
use tera::{Context, Tera};

use crate::domain::tenant::ResolvedTenant;
use crate::models::config::ServerConfig;
use crate::routes::api::parse_pagination_query;
use crate::routes::render_template;
use crate::services::pagination as pagination_service;

#[get("/partials/pagination")]
pub async fn pagination_partial(
    req: HttpRequest,
    tenant: ResolvedTenant,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = match parse_pagination_query(&req) {
        Ok(query) => query,
        Err(response) => return response,
    };

    let control =
        pagination_service::load_pagination_control(&query, server_config.default_page_size);

    let mut context = Context::new();
    context.insert("pagination", &control);
    context.insert("tenant", &tenant);

    render_template(&tera, "partials/pagination.html", &context)
}
