pub(crate) mod loading;
pub(crate) mod pagination;
pub(crate) mod status_badge;

pub use loading::Loading;
pub use pagination::Pagination;
pub use status_badge::{RequestStatusBadge, ServiceStatusBadge};
