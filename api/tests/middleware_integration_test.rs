//! Middleware behavior through the full application

mod common;

use actix_web::{http::header, http::StatusCode, test};

use pv_api::{create_app, middleware::REQUEST_ID_HEADER};
use pv_shared::{AppConfig, CorsConfig};

use common::{state_for, state_with, verizon_mobile, StubLookup};

#[actix_web::test]
async fn test_request_id_header_is_echoed() {
    let app = test::init_service(create_app(state_with(StubLookup::ok(verizon_mobile())))).await;

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header((REQUEST_ID_HEADER, "trace-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.headers().get(REQUEST_ID_HEADER).unwrap(), "trace-123");
}

#[actix_web::test]
async fn test_request_id_reaches_json_body() {
    let app = test::init_service(create_app(state_with(StubLookup::ok(verizon_mobile())))).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/validate?phone=%2B18095551234")
        .insert_header((REQUEST_ID_HEADER, "trace-456"))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["request_id"], "trace-456");
}

#[actix_web::test]
async fn test_production_requires_https() {
    let config = AppConfig::production();
    let app = test::init_service(create_app(state_for(config, StubLookup::ok(verizon_mobile())))).await;

    let req = test::TestRequest::get()
        .uri("/health")
        .peer_addr("203.0.113.9:50000".parse().unwrap())
        .to_request();
    let resp = test::try_call_service(&app, req).await;

    let status = match resp {
        Ok(resp) => resp.status(),
        Err(err) => err.as_response_error().status_code(),
    };
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_staging_adds_security_headers() {
    let config = AppConfig::for_environment(pv_shared::Environment::Staging);
    let app = test::init_service(create_app(state_for(config, StubLookup::ok(verizon_mobile())))).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let csp = resp
        .headers()
        .get(header::CONTENT_SECURITY_POLICY)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(csp.contains("script-src 'self'"));
    assert_eq!(resp.headers().get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
}

#[actix_web::test]
async fn test_cors_allowed_origin() {
    let config = AppConfig {
        cors: CorsConfig {
            allow_any_origin: false,
            allowed_origins: vec!["https://phonevalidator.com".to_string()],
            ..CorsConfig::default()
        },
        ..AppConfig::development()
    };
    let app = test::init_service(create_app(state_for(config, StubLookup::ok(verizon_mobile())))).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/validate?phone=%2B18095551234")
        .insert_header((header::ORIGIN, "https://phonevalidator.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://phonevalidator.com"
    );
}
