//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::tenant::TenantMapping;
use crate::domain::types::{HostName, TenantName};
use crate::repository::TenantReader;
use crate::repository::errors::RepositoryResult;

mock! {
    pub Repository {}

    impl TenantReader for Repository {
        fn find_tenant_by_host(&self, host: &HostName) -> RepositoryResult<Option<TenantMapping>>;
        fn find_tenant_by_name(&self, name: &TenantName) -> RepositoryResult<Option<TenantMapping>>;
    }
}
