use serde::{Deserialize, Serialize};

/// Fallback store name shown when a vendor has not named their market yet.
const DEFAULT_MARKET_NAME: &str = "My Store";

/// The merchant profile returned by the auth endpoints and cached locally.
///
/// Store-related fields are optional because older accounts registered
/// before onboarding collected them; display code goes through
/// [`VendorProfile::market_display_name`] instead of reading the raw field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VendorProfile {
    /// Unique identifier for the vendor.
    pub id: u64,

    /// The vendor's first name.
    pub first_name: String,

    /// The vendor's last name.
    pub last_name: String,

    /// The vendor's email address.
    pub email: String,

    /// The storefront name, if one has been set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_name: Option<String>,

    /// The storefront location, if one has been set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_location: Option<String>,
}

impl VendorProfile {
    /// Full name for greeting banners.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The storefront name, substituting the default when unset or blank.
    #[must_use]
    pub fn market_display_name(&self) -> &str {
        match self.market_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => DEFAULT_MARKET_NAME,
        }
    }
}

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The vendor's email address.
    pub email: String,

    /// The vendor's password.
    pub password: String,
}

/// Request body for `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// The vendor's first name.
    pub first_name: String,

    /// The vendor's last name.
    pub last_name: String,

    /// The vendor's email address.
    pub email: String,

    /// The vendor's password.
    pub password: String,

    /// The storefront name.
    pub market_name: String,

    /// The storefront location.
    pub market_location: String,
}

/// Success body for login and register: a bearer token plus the profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Opaque bearer token for subsequent requests.
    pub token: String,

    /// The authenticated vendor's profile.
    pub user: VendorProfile,
}

/// Success body for `GET /api/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeResponse {
    /// The authenticated vendor's profile.
    pub user: VendorProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> VendorProfile {
        VendorProfile {
            id: 1,
            first_name: "Ahmed".to_string(),
            last_name: "Amer".to_string(),
            email: "ahmed.amer@gmail.com".to_string(),
            market_name: Some("Teddy store".to_string()),
            market_location: Some("Cairo, Egypt".to_string()),
        }
    }

    #[test]
    fn full_name_joins_parts() {
        assert_eq!(profile().full_name(), "Ahmed Amer");
    }

    #[test]
    fn market_display_name_uses_stored_value() {
        assert_eq!(profile().market_display_name(), "Teddy store");
    }

    #[test]
    fn market_display_name_falls_back_when_unset() {
        let mut vendor = profile();
        vendor.market_name = None;
        assert_eq!(vendor.market_display_name(), "My Store");

        vendor.market_name = Some("   ".to_string());
        assert_eq!(vendor.market_display_name(), "My Store");
    }

    #[test]
    fn profile_serializes_camel_case() {
        let json = serde_json::to_string(&profile()).unwrap();
        assert!(json.contains("\"firstName\""));
        assert!(json.contains("\"marketName\""));
        assert!(!json.contains("first_name"));
    }

    #[test]
    fn profile_roundtrips() {
        let vendor = profile();
        let json = serde_json::to_string(&vendor).unwrap();
        let back: VendorProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vendor);
    }

    #[test]
    fn profile_tolerates_missing_market_fields() {
        let json = r#"{"id":7,"firstName":"Sara","lastName":"Hassan","email":"s@h.io"}"#;
        let vendor: VendorProfile = serde_json::from_str(json).unwrap();
        assert_eq!(vendor.market_name, None);
        assert_eq!(vendor.market_display_name(), "My Store");
    }

    #[test]
    fn login_response_roundtrips() {
        let response = LoginResponse {
            token: "t1".to_string(),
            user: profile(),
        };
        let json = serde_json::to_string(&response).unwrap();
        let back: LoginResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }

    #[test]
    fn register_request_serializes_camel_case() {
        let request = RegisterRequest {
            first_name: "Ahmed".to_string(),
            last_name: "Amer".to_string(),
            email: "ahmed.amer@gmail.com".to_string(),
            password: "Password123".to_string(),
            market_name: "Teddy store".to_string(),
            market_location: "Cairo, Egypt".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"marketLocation\""));
        assert!(json.contains("\"firstName\""));
    }
}
