#[cfg(feature = "server")]
use actix_web::middleware::{Compress, Logger, from_fn};
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, web};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::middleware::resolve_tenant_middleware;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::routes::api::{api_v1_pagination, api_v1_sanitize_content, api_v1_tenant};
#[cfg(feature = "server")]
use crate::routes::partials::pagination_partial;

pub mod domain;
pub mod dto;
mod error_conversions;
pub mod forms;
#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "server")]
pub mod models;
pub mod pagination;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod sanitize;
pub mod services;

/// Registers every route served behind the tenant middleware.
#[cfg(feature = "server")]
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().limit(forms::content::MAX_FORM_BODY_BYTES))
        .service(
            web::scope("/api")
                .service(api_v1_pagination)
                .service(api_v1_tenant)
                .service(api_v1_sanitize_content),
        )
        .service(pagination_partial);
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let (tenancy, directory) = server_config
        .multi_tenancy
        .clone()
        .into_parts()
        .map_err(|e| std::io::Error::other(format!("Invalid multi-tenancy config: {e}")))?;

    log::info!(
        "Loaded {} tenants, default issuer {}",
        directory.len(),
        tenancy.default_issuer
    );

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let tenancy = web::Data::new(tenancy);
    let directory = web::Data::new(directory);
    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(resolve_tenant_middleware))
            .wrap(Compress::default())
            .wrap(Logger::default())
            .configure(configure)
            .app_data(web::Data::new(tera.clone()))
            .app_data(tenancy.clone())
            .app_data(directory.clone())
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
