//! Security middleware for enforcing HTTPS and response security headers.
//!
//! - HTTPS enforcement in production, trusting `X-Forwarded-Proto` only from
//!   configured proxies
//! - Security headers (HSTS, CSP, frame and sniffing protection)
//! - Rejection of malformed `Origin` headers

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::{ErrorBadRequest, ErrorForbidden},
    http::header::{self, HeaderValue},
    Error,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use pv_shared::AppConfig;

/// Content policy for the landing page: same-origin script, inline styles.
const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; script-src 'self'; \
     style-src 'self' 'unsafe-inline'; img-src 'self' data:; form-action 'self'; \
     frame-ancestors 'none'";

/// Security middleware factory
#[derive(Debug, Clone)]
pub struct SecurityMiddleware {
    enforce_https: bool,
    add_security_headers: bool,
    trusted_proxies: Vec<String>,
}

impl SecurityMiddleware {
    /// Production enforces HTTPS and adds headers, staging only adds headers
    pub fn from_config(config: &AppConfig) -> Self {
        let enforce_https = config.is_production();
        let add_security_headers = !config.is_development();

        tracing::info!(
            enforce_https,
            add_security_headers,
            trusted_proxies = ?config.server.trusted_proxies,
            "Security middleware configured"
        );

        Self {
            enforce_https,
            add_security_headers,
            trusted_proxies: config.server.trusted_proxies.clone(),
        }
    }

    /// No HTTPS enforcement and no extra headers
    pub fn development() -> Self {
        Self {
            enforce_https: false,
            add_security_headers: false,
            trusted_proxies: vec!["127.0.0.1".to_string(), "::1".to_string()],
        }
    }

    pub fn production() -> Self {
        Self {
            enforce_https: true,
            add_security_headers: true,
            trusted_proxies: vec![],
        }
    }

    pub fn with_trusted_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.trusted_proxies.push(proxy.into());
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityMiddlewareService {
            service: Rc::new(service),
            enforce_https: self.enforce_https,
            add_security_headers: self.add_security_headers,
            trusted_proxies: Rc::new(self.trusted_proxies.clone()),
        }))
    }
}

pub struct SecurityMiddlewareService<S> {
    service: Rc<S>,
    enforce_https: bool,
    add_security_headers: bool,
    trusted_proxies: Rc<Vec<String>>,
}

impl<S, B> Service<ServiceRequest> for SecurityMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let enforce_https = self.enforce_https;
        let add_security_headers = self.add_security_headers;
        let trusted_proxies = Rc::clone(&self.trusted_proxies);

        Box::pin(async move {
            if enforce_https && !is_secure_request(&req, &trusted_proxies) {
                tracing::warn!(method = %req.method(), path = req.path(), "Insecure request blocked");
                return Err(ErrorForbidden("HTTPS required"));
            }

            if let Some(origin) = req.headers().get(header::ORIGIN) {
                if !is_valid_origin(origin) {
                    tracing::warn!(
                        origin = ?origin,
                        method = %req.method(),
                        path = req.path(),
                        "Invalid origin blocked"
                    );
                    return Err(ErrorBadRequest("Invalid request origin"));
                }
            }

            let mut response = service.call(req).await?;

            if add_security_headers {
                add_security_response_headers(&mut response);
            }

            Ok(response)
        })
    }
}

/// TLS connection, HTTPS reported by a trusted proxy, or a loopback peer.
///
/// `X-Forwarded-Proto` is ignored unless the peer is a trusted proxy.
fn is_secure_request(req: &ServiceRequest, trusted_proxies: &[String]) -> bool {
    if req.app_config().secure() {
        return true;
    }

    let peer_ip = req.peer_addr().map(|addr| addr.ip());
    if peer_ip.map_or(false, |ip| ip.is_loopback()) {
        return true;
    }

    let forwarded_https = req
        .headers()
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .map_or(false, |proto| proto.eq_ignore_ascii_case("https"));

    forwarded_https
        && peer_ip.map_or(false, |ip| is_trusted_proxy(&ip.to_string(), trusted_proxies))
}

fn is_trusted_proxy(peer_ip: &str, trusted_proxies: &[String]) -> bool {
    !peer_ip.is_empty() && trusted_proxies.iter().any(|trusted| trusted == peer_ip)
}

/// Browsers send `null` for opaque origins; anything else must be http(s)
fn is_valid_origin(origin: &HeaderValue) -> bool {
    match origin.to_str() {
        Ok(origin) => {
            origin == "null" || origin.starts_with("http://") || origin.starts_with("https://")
        }
        Err(_) => false,
    }
}

fn add_security_response_headers<B>(response: &mut ServiceResponse<B>) {
    let headers = response.headers_mut();

    headers.insert(
        header::STRICT_TRANSPORT_SECURITY,
        HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CONTENT_SECURITY_POLICY),
    );
    headers.insert(
        header::HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static("camera=(), geolocation=(), microphone=(), payment=()"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as actix_test;
    use actix_web::{http::StatusCode, web, App, HttpResponse};
    use pv_shared::Environment;

    async fn ok() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[test]
    fn test_origin_validation() {
        assert!(is_valid_origin(&HeaderValue::from_static("https://phonevalidator.com")));
        assert!(is_valid_origin(&HeaderValue::from_static("http://localhost:3000")));
        assert!(is_valid_origin(&HeaderValue::from_static("null")));
        assert!(!is_valid_origin(&HeaderValue::from_static("javascript:alert(1)")));
    }

    #[test]
    fn test_trusted_proxy_match() {
        let proxies = vec!["10.0.0.1".to_string()];
        assert!(is_trusted_proxy("10.0.0.1", &proxies));
        assert!(!is_trusted_proxy("10.0.0.2", &proxies));
        assert!(!is_trusted_proxy("", &proxies));
    }

    #[test]
    fn test_from_config_per_environment() {
        let dev = SecurityMiddleware::from_config(&AppConfig::development());
        assert!(!dev.enforce_https);
        assert!(!dev.add_security_headers);

        let staging =
            SecurityMiddleware::from_config(&AppConfig::for_environment(Environment::Staging));
        assert!(!staging.enforce_https);
        assert!(staging.add_security_headers);

        let prod = SecurityMiddleware::from_config(&AppConfig::production());
        assert!(prod.enforce_https);
        assert!(prod.add_security_headers);
    }

    #[actix_web::test]
    async fn test_production_blocks_plain_http() {
        let app = actix_test::init_service(
            App::new()
                .wrap(SecurityMiddleware::production())
                .route("/", web::get().to(ok)),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/")
            .peer_addr("203.0.113.9:40000".parse().unwrap())
            .to_request();
        let resp = actix_test::try_call_service(&app, req).await;

        let status = match resp {
            Ok(resp) => resp.status(),
            Err(err) => err.as_response_error().status_code(),
        };
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_trusted_proxy_https_is_accepted() {
        let app = actix_test::init_service(
            App::new()
                .wrap(SecurityMiddleware::production().with_trusted_proxy("10.0.0.1"))
                .route("/", web::get().to(ok)),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/")
            .insert_header(("x-forwarded-proto", "https"))
            .peer_addr("10.0.0.1:40000".parse().unwrap())
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::X_FRAME_OPTIONS).unwrap(),
            "DENY"
        );
        assert!(resp.headers().contains_key(header::CONTENT_SECURITY_POLICY));
    }

    #[actix_web::test]
    async fn test_forwarded_proto_from_untrusted_peer_is_blocked() {
        let app = actix_test::init_service(
            App::new()
                .wrap(SecurityMiddleware::production().with_trusted_proxy("10.0.0.1"))
                .route("/", web::get().to(ok)),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/")
            .insert_header(("x-forwarded-proto", "https"))
            .peer_addr("203.0.113.9:40000".parse().unwrap())
            .to_request();
        let resp = actix_test::try_call_service(&app, req).await;

        let status = match resp {
            Ok(resp) => resp.status(),
            Err(err) => err.as_response_error().status_code(),
        };
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_development_adds_no_headers() {
        let app = actix_test::init_service(
            App::new()
                .wrap(SecurityMiddleware::development())
                .route("/", web::get().to(ok)),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/").to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(!resp.headers().contains_key(header::STRICT_TRANSPORT_SECURITY));
    }

    #[actix_web::test]
    async fn test_malformed_origin_is_rejected() {
        let app = actix_test::init_service(
            App::new()
                .wrap(SecurityMiddleware::development())
                .route("/", web::get().to(ok)),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "file://local"))
            .to_request();
        let resp = actix_test::try_call_service(&app, req).await;

        let status = match resp {
            Ok(resp) => resp.status(),
            Err(err) => err.as_response_error().status_code(),
        };
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
