//! HTTP request handlers.

pub mod dashboard_handler;
pub mod donation_handler;
pub mod session_handler;

pub use dashboard_handler::dashboard_routes;
pub use donation_handler::donation_routes;
pub use session_handler::session_routes;
