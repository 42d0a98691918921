//! API endpoint modules.

pub mod health;
pub mod openapi;
pub mod reports;

pub use health::configure_health_routes;
pub use openapi::ApiDoc;
pub use reports::configure_report_routes;
pub use tests::configure_test_routes;
