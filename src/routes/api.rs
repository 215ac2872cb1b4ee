use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};

use crate::domain::tenant::ResolvedTenant;
use crate::dto::pagination::PaginationQuery;
use crate::forms::content::SanitizeContentForm;
use crate::models::config::ServerConfig;
use crate::services::ServiceError;
use crate::services::content as content_service;
use crate::services::pagination as pagination_service;

/// Parses the pagination query string, answering `400` on malformed values.
pub(crate) fn parse_pagination_query(req: &HttpRequest) -> Result<PaginationQuery, HttpResponse> {
    serde_html_form::from_str::<PaginationQuery>(req.query_string()).map_err(|err| {
        log::warn!("Rejecting pagination query {:?}: {err}", req.query_string());
        HttpResponse::BadRequest().body(format!("invalid pagination query: {err}"))
    })
}

#[get("/v1/pagination")]
/// Page buttons for a table with the given row count and active page.
pub async fn api_v1_pagination(
    req: HttpRequest,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let query = match parse_pagination_query(&req) {
        Ok(query) => query,
        Err(response) => return response,
    };

    let control =
        pagination_service::load_pagination_control(&query, server_config.default_page_size);
    HttpResponse::Ok().json(control)
}

#[get("/v1/tenant")]
/// Tenant context resolved for the calling host.
pub async fn api_v1_tenant(tenant: ResolvedTenant) -> impl Responder {
    HttpResponse::Ok().json(tenant)
}

#[post("/v1/content/sanitize")]
/// Cleans rich-text editor output before it is stored or previewed.
pub async fn api_v1_sanitize_content(form: web::Form<SanitizeContentForm>) -> impl Responder {
    match content_service::sanitize_content(form.into_inner()) {
        Ok(content) => HttpResponse::Ok().json(content),
        Err(ServiceError::Form(message)) => HttpResponse::UnprocessableEntity().body(message),
        Err(err) => {
            log::error!("Failed to sanitize content: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
