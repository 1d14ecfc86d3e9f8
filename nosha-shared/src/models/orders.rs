use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Fulfilment state of an order request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Awaiting merchant approval.
    Pending,
    /// Approved by the merchant, not yet shipped.
    Approved,
    /// Handed off to the carrier.
    Shipped,
    /// Received by the customer.
    Delivered,
}

impl RequestStatus {
    /// Return the canonical string representation expected by persistence layers.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
        }
    }

    /// Label used in table cells and filter options.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
        }
    }

    /// Every status, in workflow order, for filter dropdowns.
    #[must_use]
    pub fn all() -> [Self; 4] {
        [Self::Pending, Self::Approved, Self::Shipped, Self::Delivered]
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            _ => Err("unknown request status"),
        }
    }
}

/// A customer's order request for one product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderRequest {
    /// Unique identifier for the request.
    pub id: u64,

    /// Name of the ordered product.
    pub product: String,

    /// Name of the ordering customer.
    pub customer: String,

    /// Date the request was placed.
    pub date: NaiveDate,

    /// Current fulfilment state.
    pub status: RequestStatus,
}

/// A pickup or delivery location for the storefront.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
    /// Unique identifier for the address.
    pub id: u64,

    /// Short label, e.g. "Main Warehouse".
    pub name: String,

    /// Street address.
    pub address: String,

    /// City.
    pub city: String,

    /// Country.
    pub country: String,

    /// Whether this is the default shipping origin. At most one address
    /// carries this flag at a time.
    pub is_default: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_status_roundtrip() {
        for status in RequestStatus::all() {
            assert_eq!(RequestStatus::from_str(status.as_str()).unwrap(), status);
            assert_eq!(status.to_string(), status.as_str());
        }
    }

    #[test]
    fn request_status_invalid() {
        assert!(RequestStatus::from_str("cancelled").is_err());
    }

    #[test]
    fn order_request_roundtrips() {
        let request = OrderRequest {
            id: 1,
            product: "Teddy Bear XL".to_string(),
            customer: "Ahmed Mohamed".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            status: RequestStatus::Pending,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"2024-05-10\""));
        let back: OrderRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn delivery_address_serializes_camel_case() {
        let address = DeliveryAddress {
            id: 1,
            name: "Main Warehouse".to_string(),
            address: "123 Cairo St, Cairo".to_string(),
            city: "Cairo".to_string(),
            country: "Egypt".to_string(),
            is_default: true,
        };
        let json = serde_json::to_string(&address).unwrap();
        assert!(json.contains("\"isDefault\":true"));
    }
}
