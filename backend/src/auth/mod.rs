//! Authentication module for managing user accounts, sessions, and access control.
//!
//! This module provides the public interface for login, logout, registration,
//! the session store, and the extractor that identifies the calling user.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;

// Re-exports for convenience
pub use errors::AuthError;
pub use middleware::CurrentUser;
pub use models::{AuthResponse, Session};
pub use routes::auth_router;
pub use service::AuthService;
