//! HTTP Phone Lookup Implementation
//!
//! Sends `GET {endpoint}?{query_param}=<phone>` and maps the response:
//!
//! - 2xx: body decoded as a `ValidationResult`
//! - any other status: `LookupError::Status`, body ignored
//! - connection or body read failures: `LookupError::Transport`
//! - undecodable body: `LookupError::Decode`

use async_trait::async_trait;
use reqwest::{header, Client, Url};

use pv_core::{LookupError, PhoneLookupTrait, ValidationRequest, ValidationResult};
use pv_shared::LookupConfig;

use crate::InfrastructureError;

/// Lookup provider backed by the remote validation endpoint
#[derive(Debug, Clone)]
pub struct HttpPhoneLookup {
    client: Client,
    endpoint: Url,
    query_param: String,
}

impl HttpPhoneLookup {
    /// Build a provider from configuration.
    ///
    /// No timeout is applied unless `timeout_secs` is set.
    pub fn new(config: &LookupConfig) -> Result<Self, InfrastructureError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            InfrastructureError::Config(format!(
                "invalid lookup endpoint {:?}: {}",
                config.endpoint, e
            ))
        })?;

        let mut builder =
            Client::builder().user_agent(concat!("phone-validator/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        tracing::debug!(
            endpoint = %endpoint,
            query_param = %config.query_param,
            timeout_secs = ?config.timeout_secs,
            "Configured HTTP phone lookup"
        );

        Ok(Self {
            client: builder.build()?,
            endpoint,
            query_param: config.query_param.clone(),
        })
    }

    /// The endpoint with the phone number appended as an encoded query pair
    pub fn request_url(&self, phone: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair(&self.query_param, phone);
        url
    }
}

#[async_trait]
impl PhoneLookupTrait for HttpPhoneLookup {
    async fn lookup(&self, request: &ValidationRequest) -> Result<ValidationResult, LookupError> {
        let response = self
            .client
            .get(self.request_url(request.phone()))
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| LookupError::Transport(describe(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LookupError::Transport(describe(e)))?;

        serde_json::from_slice::<ValidationResult>(&body)
            .map_err(|e| LookupError::Decode(e.to_string()))
    }

    fn provider_name(&self) -> &'static str {
        "http"
    }
}

// The URL carries the phone number, keep it out of user-facing text and logs.
fn describe(error: reqwest::Error) -> String {
    error.without_url().to_string()
}
