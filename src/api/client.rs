//! Backend REST client for saving addresses.

use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::config::ApiConfig;
use crate::core::{BillingAddressDraft, PersistError, ShippingAddressDraft, StorefrontError};

/// Request body for the billing address endpoint.
#[derive(Debug, Serialize)]
struct BillingAddressRequest<'a> {
    billing_address: &'a BillingAddressDraft,
    gst_no: &'a str,
}

#[derive(Debug, Serialize)]
struct ShippingAddressRequest<'a> {
    shipping_address: &'a ShippingAddressDraft,
}

/// Error body returned by the backend on non-2xx answers.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Async client for the storefront backend.
///
/// ```ignore
/// let client = ApiClient::new(ApiConfig::from_env()?)?;
/// let pending = form.confirm()?;
/// let outcome = client.save_billing_address("42", pending.address()).await;
/// form.settle(pending, outcome)?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, StorefrontError> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| StorefrontError::Config(format!("invalid base URL: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(StorefrontError::Config(format!(
                "base URL '{}' cannot take path segments",
                config.base_url
            )));
        }
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StorefrontError::Config(e.to_string()))?;
        Ok(Self { http, base, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `PUT {base}/customers/{id}/billing-address`.
    pub async fn save_billing_address(
        &self,
        customer_id: &str,
        address: &BillingAddressDraft,
    ) -> Result<(), PersistError> {
        let body = BillingAddressRequest {
            billing_address: address,
            gst_no: &address.gst_no,
        };
        self.put(self.endpoint(customer_id, BILLING_RESOURCE), &body)
            .await
    }

    /// `PUT {base}/customers/{id}/shipping-address`.
    pub async fn save_shipping_address(
        &self,
        customer_id: &str,
        address: &ShippingAddressDraft,
    ) -> Result<(), PersistError> {
        let body = ShippingAddressRequest {
            shipping_address: address,
        };
        self.put(self.endpoint(customer_id, SHIPPING_RESOURCE), &body)
            .await
    }

    /// `{base}/customers/{customer_id}/{resource}`, with the id percent-encoded
    /// as a single path segment.
    fn endpoint(&self, customer_id: &str, resource: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["customers", customer_id, resource]);
        }
        url
    }

    async fn put<B: Serialize + ?Sized>(&self, url: Url, body: &B) -> Result<(), PersistError> {
        let mut req = self.http.put(url).json(body);
        if let Some(token) = &self.config.auth_token {
            req = req.bearer_auth(token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| PersistError::Network(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let text = resp
            .text()
            .await
            .map_err(|e| PersistError::Network(e.to_string()))?;
        Err(PersistError::Rejected(rejection_message(status.as_u16(), &text)))
    }
}

const BILLING_RESOURCE: &str = "billing-address";
const SHIPPING_RESOURCE: &str = "shipping-address";

/// Prefer the backend's own message; fall back to the raw body.
fn rejection_message(status: u16, body: &str) -> String {
    let detail = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .unwrap_or_else(|| body.trim().to_string());
    if detail.is_empty() {
        format!("HTTP {status}")
    } else {
        format!("HTTP {status}: {detail}")
    }
}
