//! Business logic services for the console.
//!
//! # Services
//!
//! - `profile` - Profile loading, optional organisation enrichment and the
//!   three independent save workflows (personal info, organisation,
//!   password)

pub mod profile;

pub use profile::{NO_EDITABLE_ORGANISATION, ProfileService};
