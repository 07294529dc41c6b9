//! CORS configuration for the JSON API.
//!
//! Development grants any origin. Elsewhere only the origins listed in
//! `cors.allowed_origins` receive `Access-Control-Allow-Origin`; requests from
//! other origins are still served, the browser just withholds the response
//! from the calling script.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use pv_shared::CorsConfig;

use super::request_context::REQUEST_ID_HEADER;

pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::CONTENT_TYPE,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers(vec![header::HeaderName::from_static(REQUEST_ID_HEADER)])
        .max_age(config.max_age);

    if config.allow_any_origin {
        tracing::info!("CORS allows any origin");
        cors = cors.allow_any_origin();
    } else {
        for origin in config.origins() {
            tracing::info!(origin, "Adding allowed CORS origin");
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as actix_test;
    use actix_web::{http::StatusCode, web, App, HttpResponse};

    async fn ok() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    fn restricted() -> CorsConfig {
        CorsConfig {
            allow_any_origin: false,
            allowed_origins: vec!["https://phonevalidator.com".to_string()],
            ..CorsConfig::default()
        }
    }

    #[actix_web::test]
    async fn test_allowed_origin_gets_cors_headers() {
        let app = actix_test::init_service(
            App::new()
                .wrap(create_cors(&restricted()))
                .route("/api/v1/validate", web::get().to(ok)),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/api/v1/validate")
            .insert_header((header::ORIGIN, "https://phonevalidator.com"))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "https://phonevalidator.com"
        );
    }

    #[actix_web::test]
    async fn test_unknown_origin_gets_no_grant() {
        let app = actix_test::init_service(
            App::new()
                .wrap(create_cors(&restricted()))
                .route("/api/v1/validate", web::get().to(ok)),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/api/v1/validate")
            .insert_header((header::ORIGIN, "https://evil.example"))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(!resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[actix_web::test]
    async fn test_development_allows_any_origin() {
        let app = actix_test::init_service(
            App::new()
                .wrap(create_cors(&CorsConfig::development()))
                .route("/api/v1/validate", web::get().to(ok)),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/api/v1/validate")
            .insert_header((header::ORIGIN, "http://localhost:3000"))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
