use std::collections::HashMap;

use crate::domain::tenant::TenantMapping;
use crate::domain::types::{HostName, TenantName};
use crate::repository::TenantReader;
use crate::repository::errors::{RepositoryError, RepositoryResult};

/// Tenant table loaded once at startup and shared read-only across workers.
#[derive(Debug, Clone, Default)]
pub struct StaticTenantDirectory {
    by_host: HashMap<HostName, TenantMapping>,
    by_name: HashMap<TenantName, TenantMapping>,
    count: usize,
}

impl StaticTenantDirectory {
    /// Indexes `tenants`, rejecting hosts or names claimed twice.
    pub fn new(tenants: Vec<TenantMapping>) -> RepositoryResult<Self> {
        let mut directory = Self::default();

        for tenant in tenants {
            directory.count += 1;

            if let Some(host) = &tenant.host {
                if directory.by_host.contains_key(host) {
                    return Err(RepositoryError::ConstraintViolation(format!(
                        "host {host} is mapped to more than one tenant"
                    )));
                }
                directory.by_host.insert(host.clone(), tenant.clone());
            }

            if let Some(name) = &tenant.name {
                if directory.by_name.contains_key(name) {
                    return Err(RepositoryError::ConstraintViolation(format!(
                        "tenant name {name} is used more than once"
                    )));
                }
                directory.by_name.insert(name.clone(), tenant.clone());
            }
        }

        Ok(directory)
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl TenantReader for StaticTenantDirectory {
    fn find_tenant_by_host(&self, host: &HostName) -> RepositoryResult<Option<TenantMapping>> {
        Ok(self.by_host.get(host).cloned())
    }

    fn find_tenant_by_name(&self, name: &TenantName) -> RepositoryResult<Option<TenantMapping>> {
        Ok(self.by_name.get(name).cloned())
    }
}
