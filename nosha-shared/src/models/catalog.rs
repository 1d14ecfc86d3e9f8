use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Whether a merchant service is currently offered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    /// The service is currently offered.
    Active,
    /// The service is not currently offered.
    Inactive,
}

impl ServiceStatus {
    /// Return the canonical string representation expected by persistence layers.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Flip between active and inactive.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }

    /// Label used in table cells and filter options.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceStatus {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err("unknown service status"),
        }
    }
}

/// A storefront inventory item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique identifier, doubles as the displayed SKU.
    pub id: u64,

    /// Display name of the product.
    pub name: String,

    /// Unit price in the storefront currency.
    pub price: f64,

    /// Units currently in stock.
    pub stock: u32,

    /// Categorical grouping (e.g. "Bears").
    pub category: String,
}

/// A value-added service the merchant offers alongside products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceOffering {
    /// Unique identifier for the service.
    pub id: u64,

    /// Display name of the service.
    pub name: String,

    /// Short customer-facing description.
    pub description: String,

    /// Whether the service is currently offered.
    pub status: ServiceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_status_roundtrip() {
        for (text, status) in [
            ("active", ServiceStatus::Active),
            ("inactive", ServiceStatus::Inactive),
        ] {
            assert_eq!(status.as_str(), text);
            assert_eq!(status.to_string(), text);
            assert_eq!(ServiceStatus::from_str(text).unwrap(), status);
        }
    }

    #[test]
    fn service_status_invalid() {
        assert!(ServiceStatus::from_str("paused").is_err());
    }

    #[test]
    fn service_status_toggles_both_ways() {
        assert_eq!(ServiceStatus::Active.toggled(), ServiceStatus::Inactive);
        assert_eq!(ServiceStatus::Inactive.toggled(), ServiceStatus::Active);
    }

    #[test]
    fn product_roundtrips() {
        let product = Product {
            id: 1,
            name: "Teddy Bear XL".to_string(),
            price: 29.99,
            stock: 15,
            category: "Bears".to_string(),
        };
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
