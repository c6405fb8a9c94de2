//! Custom request extractors.

mod session;

pub use session::SessionContext;
