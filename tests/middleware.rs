use actix_web::{
    App, HttpResponse,
    cookie::Cookie,
    dev::ServiceResponse,
    http::{StatusCode, header},
    middleware::from_fn,
    test, web,
};

use abp_admin::domain::tenant::ResolvedTenant;
use abp_admin::middleware::{ISSUER_COOKIE, TENANT_COOKIE, resolve_tenant_middleware};

mod common;

async fn echo_tenant(tenant: ResolvedTenant) -> HttpResponse {
    HttpResponse::Ok().json(tenant)
}

fn response_cookie<B>(resp: &ServiceResponse<B>, name: &str) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.into_owned())
}

macro_rules! tenant_app {
    () => {
        test::init_service(
            App::new()
                .wrap(from_fn(resolve_tenant_middleware))
                .app_data(web::Data::new(common::directory()))
                .app_data(web::Data::new(common::tenancy()))
                .default_service(web::to(echo_tenant)),
        )
        .await
    };
}

#[actix_web::test]
async fn tenant_host_sets_tenant_and_issuer_cookies() {
    let app = tenant_app!();

    let req = test::TestRequest::default()
        .insert_header((header::HOST, "Portal.Acme.com:443"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let tenant = response_cookie(&resp, TENANT_COOKIE).expect("tenant cookie");
    assert_eq!(tenant.value(), "acme-id");
    assert_eq!(tenant.path(), Some("/"));
    assert_eq!(tenant.http_only(), Some(true));

    let issuer = response_cookie(&resp, ISSUER_COOKIE).expect("issuer cookie");
    assert_eq!(issuer.value(), "https://auth.acme.com");

    let body: ResolvedTenant = test::read_body_json(resp).await;
    assert_eq!(body.tenant_id.unwrap().as_str(), "acme-id");
    assert_eq!(body.host.as_str(), "portal.acme.com");
}

#[actix_web::test]
async fn subdomain_resolves_by_tenant_name() {
    let app = tenant_app!();

    let req = test::TestRequest::default()
        .insert_header((header::HOST, "globex.admin.example.com"))
        .to_request();
    let body: ResolvedTenant = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.tenant_id.unwrap().as_str(), "globex-id");
    assert_eq!(body.issuer.as_str(), "https://auth.example.com");
}

#[actix_web::test]
async fn host_context_clears_stale_tenant_cookie() {
    let app = tenant_app!();

    let req = test::TestRequest::default()
        .insert_header((header::HOST, "admin.example.com"))
        .cookie(Cookie::new(TENANT_COOKIE, "acme-id"))
        .cookie(Cookie::new(ISSUER_COOKIE, "https://auth.example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let removal = response_cookie(&resp, TENANT_COOKIE).expect("removal cookie");
    assert_eq!(removal.value(), "");
    assert!(removal.max_age().is_some_and(|age| age.is_zero()));

    assert!(response_cookie(&resp, ISSUER_COOKIE).is_none());
}

#[actix_web::test]
async fn unchanged_cookies_are_not_resent() {
    let app = tenant_app!();

    let req = test::TestRequest::default()
        .insert_header((header::HOST, "portal.acme.com"))
        .cookie(Cookie::new(TENANT_COOKIE, "acme-id"))
        .cookie(Cookie::new(ISSUER_COOKIE, "https://auth.acme.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get(header::SET_COOKIE).is_none());
}

#[actix_web::test]
async fn invalid_host_is_rejected() {
    let app = tenant_app!();

    let req = test::TestRequest::default()
        .insert_header((header::HOST, "bad host"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn missing_tenant_data_is_a_server_error() {
    let app = test::init_service(
        App::new()
            .wrap(from_fn(resolve_tenant_middleware))
            .default_service(web::to(|| async { HttpResponse::Ok().finish() })),
    )
    .await;

    let req = test::TestRequest::default().to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
