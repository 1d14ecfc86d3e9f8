//! Wire models exchanged with the Nosha REST backend.

/// Authentication and vendor profile models.
pub mod auth;
/// Product and service catalog models.
pub mod catalog;
/// Dashboard overview and sales models.
pub mod dashboard;
/// Error payloads returned by the backend.
pub mod errors;
/// Order request and delivery address models.
pub mod orders;

pub use auth::{LoginRequest, LoginResponse, MeResponse, RegisterRequest, VendorProfile};
pub use catalog::{Product, ServiceOffering, ServiceStatus};
pub use dashboard::{DashboardData, DashboardOverview, DashboardResponse, SalesPoint};
pub use errors::ErrorResponse;
pub use orders::{DeliveryAddress, OrderRequest, RequestStatus};
