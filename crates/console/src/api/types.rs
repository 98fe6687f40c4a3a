//! Response envelopes used by the backend.

use serde::Deserialize;

use tableside_core::{OutletInfo, TenantInfo};

/// Every JSON response wraps its payload in `data`.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Payload of `GET /tenants/:id/details`.
///
/// The backend also returns `users` and `orderStats`; the console only reads
/// the tenant record.
#[derive(Debug, Deserialize)]
pub struct TenantDetails {
    pub tenant: TenantInfo,
}

/// Payload of `GET /outlets/:id`.
#[derive(Debug, Deserialize)]
pub struct OutletDetails {
    pub outlet: OutletInfo,
}
