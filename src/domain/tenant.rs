use serde::{Deserialize, Serialize};

use crate::domain::types::{HostName, IssuerUrl, TenantId, TenantName};

/// Known tenant and the ways a request can be routed to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TenantMapping {
    pub tenant_id: TenantId,
    /// Name used for subdomain routing (`{name}.<suffix>`).
    pub name: Option<TenantName>,
    /// Dedicated host serving this tenant.
    pub host: Option<HostName>,
    /// Tenant-specific issuer, falling back to the default issuer when absent.
    pub issuer: Option<IssuerUrl>,
}

impl TenantMapping {
    pub fn new(tenant_id: TenantId) -> Self {
        Self {
            tenant_id,
            name: None,
            host: None,
            issuer: None,
        }
    }

    pub fn with_name(mut self, name: TenantName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_host(mut self, host: HostName) -> Self {
        self.host = Some(host);
        self
    }

    pub fn with_issuer(mut self, issuer: IssuerUrl) -> Self {
        self.issuer = Some(issuer);
        self
    }
}

/// Outcome of mapping an inbound host to a tenant context.
///
/// `tenant_id == None` is the host (administrator) context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedTenant {
    pub host: HostName,
    pub tenant_id: Option<TenantId>,
    pub tenant_name: Option<TenantName>,
    pub issuer: IssuerUrl,
}

impl ResolvedTenant {
    /// Host context served by the default issuer.
    pub fn host_context(host: HostName, issuer: IssuerUrl) -> Self {
        Self {
            host,
            tenant_id: None,
            tenant_name: None,
            issuer,
        }
    }

    /// Context for `mapping`, using `default_issuer` unless the tenant has its own.
    pub fn for_tenant(host: HostName, mapping: TenantMapping, default_issuer: &IssuerUrl) -> Self {
        Self {
            host,
            tenant_id: Some(mapping.tenant_id),
            tenant_name: mapping.name,
            issuer: mapping.issuer.unwrap_or_else(|| default_issuer.clone()),
        }
    }

    pub fn is_host(&self) -> bool {
        self.tenant_id.is_none()
    }
}

/// Validated multi-tenancy settings used while resolving inbound hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenancySettings {
    pub default_issuer: IssuerUrl,
    /// Domain under which `{tenant}.<suffix>` hosts are routed by name.
    pub subdomain_suffix: Option<String>,
}

impl TenancySettings {
    pub fn new(default_issuer: IssuerUrl) -> Self {
        Self {
            default_issuer,
            subdomain_suffix: None,
        }
    }

    pub fn with_subdomain_suffix<S: Into<String>>(mut self, suffix: S) -> Self {
        self.subdomain_suffix = Some(suffix.into());
        self
    }
}
