mod account;
mod dashboard;
mod delivery;
mod login;
mod products;
mod requests;
mod services;
mod signup;
mod store;
mod welcome;

pub use account::AccountSettingsPage;
pub use dashboard::DashboardPage;
pub use delivery::DeliveryPage;
pub use login::LoginPage;
pub use products::ProductsPage;
pub use requests::RequestsPage;
pub use services::ServicesPage;
pub use signup::SignUpPage;
pub use store::StoreSettingsPage;
pub use welcome::WelcomePage;
