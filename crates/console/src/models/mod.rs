//! Domain models for the console.
//!
//! Backend records live in `tableside_core`; this module holds the state the
//! console itself keeps between requests.

pub mod session;

pub use session::{SessionContext, keys as session_keys};
