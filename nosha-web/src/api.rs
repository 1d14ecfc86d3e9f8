//! HTTP client for the Nosha REST backend.
//!
//! One attempt per call, no retry, no added timeout. Transport failures and
//! non-2xx replies surface as distinct error variants so forms can offer
//! the right remediation ("is the server running" vs "fix your input").

use crate::config::ApiConfig;
use crate::session::SessionStore;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared::models::{
    DashboardResponse, ErrorResponse, LoginRequest, LoginResponse, MeResponse, Product,
    RegisterRequest,
};
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;

thread_local! {
    static SHARED_CLIENT: OnceCell<NoshaClient> = OnceCell::new();
}

/// Single-call latch for submit handlers.
///
/// Disabled buttons are rendered state and lag a render behind, so a second
/// trigger inside the same task (the demo sign-in, a programmatic submit)
/// would still get through. The latch flips synchronously; only the first
/// trigger spawns a request.
#[derive(Debug, Clone, Default)]
pub struct InFlight(Rc<Cell<bool>>);

impl InFlight {
    /// Claim the latch. Returns `false` when a call is already running.
    pub fn begin(&self) -> bool {
        !self.0.replace(true)
    }

    /// Release the latch once the call settles.
    pub fn finish(&self) {
        self.0.set(false);
    }
}

/// Failure of one API call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced an HTTP response (DNS, refused, timeout).
    #[error("Cannot connect to the server. Please make sure the backend server is running on {host}.")]
    Network {
        /// Backend host the call was aimed at.
        host: String,
    },

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the response body, or the generic fallback.
        message: String,
    },
}

impl ClientError {
    /// Status code for API errors, `None` for transport failures.
    #[must_use]
    #[allow(dead_code)]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Network { .. } => None,
        }
    }
}

/// Extract the user-facing message from a non-2xx body.
///
/// The backend sends `{"message": ...}`; anything else falls back to the
/// status-code text the original client used.
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|error| error.message)
        .unwrap_or_else(|_| format!("Request failed with status: {status}"))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status().as_u16();
    if !(200..300).contains(&status) {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Api {
            status,
            message: error_message(status, &body),
        });
    }

    response.json().await.map_err(|_| ClientError::Api {
        status,
        message: "Malformed response from server".to_string(),
    })
}

/// Lightweight API client for Nosha console interactions.
#[derive(Clone, Debug)]
pub struct NoshaClient {
    config: ApiConfig,
    client: Client,
}

impl NoshaClient {
    /// Create a client against the given backend configuration.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// The process-wide client, configured from the current hostname.
    #[must_use]
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(ApiConfig::detect()))
                .clone()
        })
    }

    /// Backend host, for "server unreachable" messages.
    #[must_use]
    #[allow(dead_code)]
    pub fn server_host(&self) -> &str {
        &self.config.server_host
    }

    fn apply_auth(&self, request: RequestBuilder, requires_auth: bool) -> RequestBuilder {
        let request = request.header("Accept", "application/json");
        if requires_auth {
            if let Some(token) = SessionStore::token() {
                return request.bearer_auth(token);
            }
        }
        request
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        requires_auth: bool,
    ) -> Result<T, ClientError> {
        let response = self
            .apply_auth(request, requires_auth)
            .send()
            .await
            .map_err(|_| ClientError::Network {
                host: self.config.server_host.clone(),
            })?;
        decode(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ClientError> {
        self.send(self.client.get(url), true).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: String,
        body: &B,
        requires_auth: bool,
    ) -> Result<T, ClientError> {
        self.send(self.client.post(url).json(body), requires_auth)
            .await
    }

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, ClientError> {
        self.post_json(self.config.login_url(), payload, false).await
    }

    /// Register a new vendor account.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<LoginResponse, ClientError> {
        self.post_json(self.config.register_url(), payload, false)
            .await
    }

    /// Retrieve the authenticated vendor's profile.
    #[allow(dead_code)]
    pub async fn me(&self) -> Result<MeResponse, ClientError> {
        self.get_json(self.config.me_url()).await
    }

    /// Check whether the stored bearer token is still accepted.
    #[allow(dead_code)]
    pub async fn validate_token(&self) -> Result<Value, ClientError> {
        self.get_json(self.config.validate_url()).await
    }

    /// Fetch the dashboard payload for a vendor.
    pub async fn dashboard(&self, vendor_id: u64) -> Result<DashboardResponse, ClientError> {
        self.get_json(self.config.dashboard_url(vendor_id)).await
    }

    /// Fetch a settings category for a vendor.
    #[allow(dead_code)]
    pub async fn vendor_settings(
        &self,
        vendor_id: u64,
        category: &str,
    ) -> Result<Value, ClientError> {
        self.get_json(self.config.vendor_settings_url(vendor_id, Some(category)))
            .await
    }

    /// Replace a settings category for a vendor.
    pub async fn update_vendor_settings(
        &self,
        vendor_id: u64,
        category: &str,
        settings: &Value,
    ) -> Result<Value, ClientError> {
        self.send(
            self.client
                .put(self.config.vendor_settings_url(vendor_id, Some(category)))
                .json(settings),
            true,
        )
        .await
    }

    /// List a vendor's products.
    #[allow(dead_code)]
    pub async fn vendor_products(&self, vendor_id: u64) -> Result<Vec<Product>, ClientError> {
        self.get_json(self.config.vendor_products_url(vendor_id))
            .await
    }

    /// Create a product.
    #[allow(dead_code)]
    pub async fn create_product(&self, product: &Product) -> Result<Product, ClientError> {
        self.post_json(self.config.product_url(None), product, true)
            .await
    }

    /// Update a product.
    #[allow(dead_code)]
    pub async fn update_product(&self, product: &Product) -> Result<Product, ClientError> {
        self.send(
            self.client
                .put(self.config.product_url(Some(product.id)))
                .json(product),
            true,
        )
        .await
    }

    /// Delete a product.
    #[allow(dead_code)]
    pub async fn delete_product(&self, id: u64) -> Result<Value, ClientError> {
        self.send(self.client.delete(self.config.product_url(Some(id))), true)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_body_is_preferred() {
        let body = r#"{"message":"Invalid email or password","details":null}"#;
        assert_eq!(error_message(401, body), "Invalid email or password");
    }

    #[test]
    fn non_json_body_falls_back_to_status_text() {
        assert_eq!(
            error_message(502, "<html>Bad Gateway</html>"),
            "Request failed with status: 502"
        );
        assert_eq!(error_message(500, ""), "Request failed with status: 500");
    }

    #[test]
    fn json_without_message_field_falls_back() {
        assert_eq!(
            error_message(404, r#"{"error":"missing"}"#),
            "Request failed with status: 404"
        );
    }

    #[test]
    fn client_error_display_matches_banner_copy() {
        let network = ClientError::Network {
            host: "localhost:5001".to_string(),
        };
        assert_eq!(
            network.to_string(),
            "Cannot connect to the server. Please make sure the backend server is running on localhost:5001."
        );
        assert_eq!(network.status(), None);

        let api = ClientError::Api {
            status: 409,
            message: "Email already registered".to_string(),
        };
        assert_eq!(api.to_string(), "Email already registered");
        assert_eq!(api.status(), Some(409));
    }

    #[test]
    fn latch_admits_only_the_first_trigger() {
        let latch = InFlight::default();
        assert!(latch.begin());
        assert!(!latch.begin());
        latch.finish();
        assert!(latch.begin());
    }

    #[test]
    fn latch_clones_share_one_flag() {
        let latch = InFlight::default();
        let other = latch.clone();
        assert!(latch.begin());
        assert!(!other.begin());
        other.finish();
        assert!(latch.begin());
    }

    #[test]
    fn client_builds_against_config() {
        let client = NoshaClient::new(ApiConfig::for_hostname("localhost"));
        assert_eq!(client.server_host(), "localhost:5001");
    }
}
