//! Tableside backend integration.
//!
//! This module provides:
//! - [`ApiClient`] holding the shared HTTP client and backend base URL
//! - [`AuthorizedClient`] for calls made on behalf of a signed-in staff member
//! - [`ApiError`] with uniform message extraction from error responses
//!
//! # Endpoints
//!
//! ```text
//! GET   /users/profile                   fetch_profile
//! PATCH /users/profile/update            update_profile
//! PATCH /users/profile/change-password   change_password
//! PATCH /tenants/:id/update              update_tenant_details
//! PATCH /outlets/:id/update              update_outlet_details
//! GET   /tenants/:id/details             fetch_tenant_details
//! GET   /outlets/:id                     fetch_outlet_details
//! ```

mod client;
mod error;
mod types;

pub use client::{ApiClient, AuthorizedClient};
pub use error::ApiError;
pub use types::{DataEnvelope, OutletDetails, TenantDetails};
