//! HTTP middleware for the console.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions, in-memory store)
//! 4. `RequireSession` extractor on protected handlers

pub mod auth;
pub mod session;

pub use auth::{
    RequireSession, SESSION_BOOTSTRAP_PATH, SessionRejection, clear_session_context,
    load_session_context, save_session_context,
};
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
