use serde::{Deserialize, Serialize};

use super::{OrderRequest, VendorProfile};

/// One point in a sales-over-time series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesPoint {
    /// Axis label, e.g. a month or weekday abbreviation.
    pub name: String,

    /// Sales figure for the period.
    pub sales: f64,
}

/// Headline figures for the dashboard stat cards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    /// Lifetime sales total.
    pub total_sales: f64,

    /// Sales volume for the current month.
    pub active_sales: f64,

    /// Revenue for the previous month.
    pub product_revenue: f64,
}

/// The dashboard payload body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    /// Headline stat-card figures.
    pub overview: DashboardOverview,

    /// Sales series for the charts.
    pub analytics: Vec<SalesPoint>,

    /// Most recent order requests.
    pub last_orders: Vec<OrderRequest>,
}

/// Success body for `GET /api/dashboard/{vendorId}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardResponse {
    /// The vendor the dashboard belongs to.
    pub vendor: VendorProfile,

    /// The dashboard figures and recent activity.
    pub dashboard: DashboardData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RequestStatus;
    use chrono::NaiveDate;

    #[test]
    fn dashboard_response_roundtrips() {
        let response = DashboardResponse {
            vendor: VendorProfile {
                id: 1,
                first_name: "Ahmed".to_string(),
                last_name: "Amer".to_string(),
                email: "ahmed.amer@gmail.com".to_string(),
                market_name: Some("Teddy store".to_string()),
                market_location: None,
            },
            dashboard: DashboardData {
                overview: DashboardOverview {
                    total_sales: 50_000.0,
                    active_sales: 28_000.0,
                    product_revenue: 16_000.0,
                },
                analytics: vec![SalesPoint {
                    name: "Jan".to_string(),
                    sales: 4_000.0,
                }],
                last_orders: vec![OrderRequest {
                    id: 1,
                    product: "Teddy Bear XL".to_string(),
                    customer: "Ahmed Mohamed".to_string(),
                    date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
                    status: RequestStatus::Pending,
                }],
            },
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"lastOrders\""));
        assert!(json.contains("\"totalSales\""));
        let back: DashboardResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }
}
