//! Backend endpoint configuration.
//!
//! The console talks to one of two backends depending on where the bundle is
//! served from: a local development server when running on `localhost`, or
//! the fixed production host otherwise. No other environment input is read.

const DEV_HOST: &str = "localhost:5001";
const PROD_HOST: &str = "157.245.108.130:5001";

/// Resolved backend configuration for the current runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Host (and port) of the backend, without scheme or path.
    pub server_host: String,
    /// Base URL all endpoint paths are appended to, e.g. `http://host/api`.
    pub base_url: String,
}

impl ApiConfig {
    /// Configuration for a given frontend hostname.
    #[must_use]
    pub fn for_hostname(hostname: &str) -> Self {
        let server_host = if hostname == "localhost" || hostname == "127.0.0.1" {
            DEV_HOST
        } else {
            PROD_HOST
        };
        Self {
            server_host: server_host.to_string(),
            base_url: format!("http://{server_host}/api"),
        }
    }

    /// Configuration for the hostname the bundle is currently served from.
    #[must_use]
    pub fn detect() -> Self {
        let hostname = web_sys::window()
            .and_then(|window| window.location().hostname().ok())
            .unwrap_or_default();
        Self::for_hostname(&hostname)
    }

    /// `POST /api/auth/login`
    #[must_use]
    pub fn login_url(&self) -> String {
        format!("{}/auth/login", self.base_url)
    }

    /// `POST /api/auth/register`
    #[must_use]
    pub fn register_url(&self) -> String {
        format!("{}/auth/register", self.base_url)
    }

    /// `GET /api/auth/me`
    #[must_use]
    #[allow(dead_code)]
    pub fn me_url(&self) -> String {
        format!("{}/auth/me", self.base_url)
    }

    /// `GET /api/auth/validate`
    #[must_use]
    #[allow(dead_code)]
    pub fn validate_url(&self) -> String {
        format!("{}/auth/validate", self.base_url)
    }

    /// `GET /api/dashboard/{vendorId}`
    #[must_use]
    pub fn dashboard_url(&self, vendor_id: u64) -> String {
        format!("{}/dashboard/{vendor_id}", self.base_url)
    }

    /// `GET|PUT /api/vendors/{vendorId}/settings[/{category}]`
    #[must_use]
    pub fn vendor_settings_url(&self, vendor_id: u64, category: Option<&str>) -> String {
        match category {
            Some(category) => format!("{}/vendors/{vendor_id}/settings/{category}", self.base_url),
            None => format!("{}/vendors/{vendor_id}/settings", self.base_url),
        }
    }

    /// `GET /api/products/vendor/{vendorId}`
    #[must_use]
    #[allow(dead_code)]
    pub fn vendor_products_url(&self, vendor_id: u64) -> String {
        format!("{}/products/vendor/{vendor_id}", self.base_url)
    }

    /// `POST /api/products` and `PUT|DELETE /api/products/{id}`
    #[must_use]
    #[allow(dead_code)]
    pub fn product_url(&self, id: Option<u64>) -> String {
        match id {
            Some(id) => format!("{}/products/{id}", self.base_url),
            None => format!("{}/products", self.base_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localhost_selects_dev_backend() {
        let config = ApiConfig::for_hostname("localhost");
        assert_eq!(config.server_host, "localhost:5001");
        assert_eq!(config.base_url, "http://localhost:5001/api");
    }

    #[test]
    fn loopback_selects_dev_backend() {
        let config = ApiConfig::for_hostname("127.0.0.1");
        assert_eq!(config.server_host, "localhost:5001");
    }

    #[test]
    fn other_hosts_select_production_backend() {
        let config = ApiConfig::for_hostname("console.nosha.app");
        assert_eq!(config.server_host, "157.245.108.130:5001");
        assert_eq!(config.base_url, "http://157.245.108.130:5001/api");
    }

    #[test]
    fn auth_urls_follow_api_convention() {
        let config = ApiConfig::for_hostname("localhost");
        assert_eq!(config.login_url(), "http://localhost:5001/api/auth/login");
        assert_eq!(
            config.register_url(),
            "http://localhost:5001/api/auth/register"
        );
        assert_eq!(config.me_url(), "http://localhost:5001/api/auth/me");
        assert_eq!(
            config.validate_url(),
            "http://localhost:5001/api/auth/validate"
        );
    }

    #[test]
    fn resource_urls_embed_identifiers() {
        let config = ApiConfig::for_hostname("localhost");
        assert_eq!(
            config.dashboard_url(7),
            "http://localhost:5001/api/dashboard/7"
        );
        assert_eq!(
            config.vendor_settings_url(7, None),
            "http://localhost:5001/api/vendors/7/settings"
        );
        assert_eq!(
            config.vendor_settings_url(7, Some("store")),
            "http://localhost:5001/api/vendors/7/settings/store"
        );
        assert_eq!(
            config.vendor_products_url(7),
            "http://localhost:5001/api/products/vendor/7"
        );
        assert_eq!(config.product_url(None), "http://localhost:5001/api/products");
        assert_eq!(
            config.product_url(Some(3)),
            "http://localhost:5001/api/products/3"
        );
    }
}
