//! Tenant resolution for every inbound request.
//!
//! The resolved tenant is stored in request extensions and mirrored into the
//! `__tenant` and `issuer` cookies the front-end and identity backend read.

use std::future::{Ready, ready};

use actix_web::{
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
    body::{EitherBody, MessageBody},
    cookie::{Cookie, SameSite},
    dev::{Payload, ServiceRequest, ServiceResponse},
    error::ErrorInternalServerError,
    middleware::Next,
    web,
};

use crate::domain::tenant::{ResolvedTenant, TenancySettings};
use crate::repository::StaticTenantDirectory;
use crate::services::ServiceError;
use crate::services::tenant::resolve_tenant;

/// Cookie carrying the tenant id, named as the identity backend expects it.
pub const TENANT_COOKIE: &str = "__tenant";
/// Cookie carrying the issuer the sign-in flow must use.
pub const ISSUER_COOKIE: &str = "issuer";

fn session_cookie(name: &'static str, value: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(name, value);
    cookie.set_path("/");
    cookie.set_same_site(SameSite::Lax);
    cookie.set_http_only(true);
    cookie
}

/// Brings `response` cookies in line with `resolved`, touching only those that changed.
fn sync_cookies<B>(
    response: &mut ServiceResponse<B>,
    resolved: &ResolvedTenant,
    current_tenant: Option<String>,
    current_issuer: Option<String>,
) -> Result<(), Error> {
    let wanted_tenant = resolved.tenant_id.as_ref().map(|id| id.to_string());

    if wanted_tenant != current_tenant {
        let res = response.response_mut();
        match wanted_tenant {
            Some(tenant_id) => {
                log::info!("Switching {} to tenant {tenant_id}", resolved.host);
                res.add_cookie(&session_cookie(TENANT_COOKIE, tenant_id))
                    .map_err(ErrorInternalServerError)?;
            }
            None => {
                log::info!("Switching {} to host context", resolved.host);
                res.add_removal_cookie(&session_cookie(TENANT_COOKIE, String::new()))
                    .map_err(ErrorInternalServerError)?;
            }
        }
    }

    if current_issuer.as_deref() != Some(resolved.issuer.as_str()) {
        response
            .response_mut()
            .add_cookie(&session_cookie(ISSUER_COOKIE, resolved.issuer.to_string()))
            .map_err(ErrorInternalServerError)?;
    }

    Ok(())
}

/// Resolves the tenant from the `Host` header before the request reaches a handler.
///
/// Requires `web::Data<StaticTenantDirectory>` and `web::Data<TenancySettings>`
/// in app data. Hosts that cannot be parsed get `400 Bad Request`.
pub async fn resolve_tenant_middleware<B>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error>
where
    B: MessageBody + 'static,
{
    let (Some(directory), Some(settings)) = (
        req.app_data::<web::Data<StaticTenantDirectory>>().cloned(),
        req.app_data::<web::Data<TenancySettings>>().cloned(),
    ) else {
        log::error!("Tenant directory or settings missing from app data");
        return Ok(req
            .into_response(HttpResponse::InternalServerError().finish())
            .map_into_right_body());
    };

    let host = req.connection_info().host().to_string();

    let resolved = match resolve_tenant(directory.get_ref(), &settings, &host) {
        Ok(resolved) => resolved,
        Err(ServiceError::TypeConstraint(err)) => {
            log::warn!("Rejecting request with host {host:?}: {err}");
            return Ok(req
                .into_response(HttpResponse::BadRequest().body("invalid host"))
                .map_into_right_body());
        }
        Err(err) => {
            log::error!("Failed to resolve tenant for host {host:?}: {err}");
            return Ok(req
                .into_response(HttpResponse::InternalServerError().finish())
                .map_into_right_body());
        }
    };

    let current_tenant = req.cookie(TENANT_COOKIE).map(|c| c.value().to_string());
    let current_issuer = req.cookie(ISSUER_COOKIE).map(|c| c.value().to_string());

    req.extensions_mut().insert(resolved.clone());

    let mut response = next.call(req).await?;
    sync_cookies(&mut response, &resolved, current_tenant, current_issuer)?;

    Ok(response.map_into_left_body())
}

impl FromRequest for ResolvedTenant {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<ResolvedTenant>()
                .cloned()
                .ok_or_else(|| ErrorInternalServerError("tenant middleware is not installed")),
        )
    }
}
