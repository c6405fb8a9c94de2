//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Session
// =============================================================================

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE_NAME: &str = "nourishnet_session";

/// Default session lifetime in hours
pub const DEFAULT_SESSION_EXPIRATION_HOURS: i64 = 24;

/// Minimum session secret length (HS256 signing key)
pub const MIN_SESSION_SECRET_LENGTH: usize = 32;

// =============================================================================
// Routes
// =============================================================================

/// Landing page path
pub const ROUTE_INDEX: &str = "/";

/// Role-routed dashboard path
pub const ROUTE_DASHBOARD: &str = "/dashboard";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://nourishnet.db?mode=rwc";

/// Default upper bound of pooled connections
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Default number of connections kept open
pub const DEFAULT_DATABASE_MIN_CONNECTIONS: u32 = 1;
