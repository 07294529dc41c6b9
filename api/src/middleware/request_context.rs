//! Per-request context: request id and display language.
//!
//! The request id comes from `X-Request-ID` when the client sends one and is
//! generated otherwise; it is echoed on the response. The language is taken
//! from the `lang` query parameter, then `Accept-Language`, then the default.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{self, HeaderName, HeaderValue},
    web, Error, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use serde::Deserialize;
use std::future::{ready, Ready};
use std::rc::Rc;
use uuid::Uuid;

use pv_shared::Language;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Identifier attached to every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

#[derive(Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

/// Resolve the display language of a request
pub fn resolve_language(query_string: &str, accept_language: Option<&str>) -> Language {
    let requested = web::Query::<LangQuery>::from_query(query_string)
        .ok()
        .and_then(|q| q.into_inner().lang)
        .and_then(|lang| lang.parse::<Language>().ok());

    requested.unwrap_or_else(|| {
        accept_language
            .map(Language::from_accept_language)
            .unwrap_or_default()
    })
}

/// Middleware storing `RequestId` and `Language` in request extensions
pub struct RequestContext;

impl<S, B> Transform<S, ServiceRequest> for RequestContext
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestContextService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestContextService {
            service: Rc::new(service),
        }))
    }
}

pub struct RequestContextService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestContextService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(String::from)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let language = resolve_language(
            req.query_string(),
            req.headers()
                .get(header::ACCEPT_LANGUAGE)
                .and_then(|v| v.to_str().ok()),
        );

        req.extensions_mut().insert(RequestId(request_id.clone()));
        req.extensions_mut().insert(language);

        Box::pin(async move {
            let mut response = service.call(req).await?;

            if let Ok(value) = HeaderValue::from_str(&request_id) {
                response
                    .headers_mut()
                    .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
            }

            Ok(response)
        })
    }
}

/// Access to the context stored by `RequestContext`
pub trait RequestContextExt {
    fn get_request_id(&self) -> Option<String>;
    fn get_language(&self) -> Language;
}

impl RequestContextExt for ServiceRequest {
    fn get_request_id(&self) -> Option<String> {
        self.extensions().get::<RequestId>().map(|id| id.0.clone())
    }

    fn get_language(&self) -> Language {
        self.extensions()
            .get::<Language>()
            .copied()
            .unwrap_or_default()
    }
}

impl RequestContextExt for HttpRequest {
    fn get_request_id(&self) -> Option<String> {
        self.extensions().get::<RequestId>().map(|id| id.0.clone())
    }

    fn get_language(&self) -> Language {
        self.extensions()
            .get::<Language>()
            .copied()
            .unwrap_or_default()
    }
}
