//! Tableside Core - Shared types library.
//!
//! This crate provides the domain types used by the Tableside console:
//! - `console` - Back-office profile and organisation settings
//! - `integration-tests` - End-to-end tests against a stub backend
//!
//! # Architecture
//!
//! The core crate contains only types and pure lookups - no I/O, no HTTP
//! clients. Every record here mirrors the JSON the backend serves under
//! `/api/v1`.
//!
//! # Modules
//!
//! - [`types`] - IDs, roles, statuses, profile/organisation records and
//!   update payloads

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
