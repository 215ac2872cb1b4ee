use crate::{
    domain::{
        tenant::TenantMapping,
        types::{HostName, TenantName},
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod tenant;

pub use tenant::StaticTenantDirectory;

/// Lookup of tenants known to the identity backend.
pub trait TenantReader {
    /// Tenant bound to exactly this host, if any.
    fn find_tenant_by_host(&self, host: &HostName) -> RepositoryResult<Option<TenantMapping>>;
    /// Tenant routed by subdomain label, if any.
    fn find_tenant_by_name(&self, name: &TenantName) -> RepositoryResult<Option<TenantMapping>>;
}
