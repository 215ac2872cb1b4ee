use crate::domain::tenant::{ResolvedTenant, TenancySettings};
use crate::domain::types::{HostName, TenantName};
use crate::repository::TenantReader;
use crate::services::ServiceResult;

/// Maps a raw `Host` header value to the tenant context it serves.
///
/// An exact host binding wins over subdomain routing. Hosts matching neither
/// resolve to the host context with the default issuer.
pub fn resolve_tenant<R>(
    repo: &R,
    settings: &TenancySettings,
    raw_host: &str,
) -> ServiceResult<ResolvedTenant>
where
    R: TenantReader + ?Sized,
{
    let host = HostName::new(raw_host)?;

    let mut mapping = repo.find_tenant_by_host(&host).map_err(|err| {
        log::error!("Failed to look up tenant for host {host}: {err}");
        err
    })?;

    if mapping.is_none()
        && let Some(suffix) = settings.subdomain_suffix.as_deref()
        && let Some(label) = host.subdomain_of(suffix)
    {
        let name = TenantName::new(label)?;
        mapping = repo.find_tenant_by_name(&name).map_err(|err| {
            log::error!("Failed to look up tenant named {name}: {err}");
            err
        })?;
        if mapping.is_none() {
            log::debug!("No tenant named {name} for host {host}");
        }
    }

    let resolved = match mapping {
        Some(mapping) => ResolvedTenant::for_tenant(host, mapping, &settings.default_issuer),
        None => ResolvedTenant::host_context(host, settings.default_issuer.clone()),
    };

    log::debug!(
        "Resolved host {} to tenant {:?} with issuer {}",
        resolved.host,
        resolved.tenant_id.as_ref().map(|id| id.as_str()),
        resolved.issuer
    );

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tenant::TenantMapping;
    use crate::domain::types::{IssuerUrl, TenantId};
    use crate::repository::StaticTenantDirectory;
    use crate::services::ServiceError;

    fn settings() -> TenancySettings {
        TenancySettings::new(IssuerUrl::new("https://auth.example.com").unwrap())
            .with_subdomain_suffix(".admin.example.com")
    }

    fn directory() -> StaticTenantDirectory {
        StaticTenantDirectory::new(vec![
            TenantMapping::new(TenantId::new("acme-id").unwrap())
                .with_name(TenantName::new("acme").unwrap())
                .with_host(HostName::new("portal.acme.com").unwrap())
                .with_issuer(IssuerUrl::new("https://auth.acme.com").unwrap()),
            TenantMapping::new(TenantId::new("globex-id").unwrap())
                .with_name(TenantName::new("globex").unwrap()),
        ])
        .unwrap()
    }

    #[test]
    fn exact_host_uses_tenant_issuer() {
        let resolved = resolve_tenant(&directory(), &settings(), "Portal.Acme.com:443").unwrap();

        assert_eq!(resolved.host.as_str(), "portal.acme.com");
        assert_eq!(resolved.tenant_id.unwrap().as_str(), "acme-id");
        assert_eq!(resolved.issuer.as_str(), "https://auth.acme.com");
    }

    #[test]
    fn subdomain_falls_back_to_default_issuer() {
        let resolved =
            resolve_tenant(&directory(), &settings(), "globex.admin.example.com").unwrap();

        assert_eq!(resolved.tenant_id.unwrap().as_str(), "globex-id");
        assert_eq!(resolved.tenant_name.unwrap().as_str(), "globex");
        assert_eq!(resolved.issuer.as_str(), "https://auth.example.com");
    }

    #[test]
    fn unknown_hosts_resolve_to_host_context() {
        let resolved = resolve_tenant(&directory(), &settings(), "admin.example.com").unwrap();
        assert!(resolved.is_host());
        assert_eq!(resolved.issuer.as_str(), "https://auth.example.com");

        let resolved =
            resolve_tenant(&directory(), &settings(), "initech.admin.example.com").unwrap();
        assert!(resolved.is_host());
    }

    #[test]
    fn subdomains_ignored_without_suffix() {
        let settings = TenancySettings::new(IssuerUrl::new("https://auth.example.com").unwrap());

        let resolved =
            resolve_tenant(&directory(), &settings, "globex.admin.example.com").unwrap();

        assert!(resolved.is_host());
    }

    #[test]
    fn invalid_host_is_a_type_constraint_error() {
        let result = resolve_tenant(&directory(), &settings(), "bad host");

        assert!(matches!(result, Err(ServiceError::TypeConstraint(_))));
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod mock_tests {
    use super::*;
    use crate::domain::tenant::TenantMapping;
    use crate::domain::types::{IssuerUrl, TenantId};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

    #[test]
    fn skips_name_lookup_when_host_matches() {
        let mut repo = MockRepository::new();
        repo.expect_find_tenant_by_host()
            .times(1)
            .returning(|_| Ok(Some(TenantMapping::new(TenantId::new("t-1").unwrap()))));
        repo.expect_find_tenant_by_name().never();

        let settings = TenancySettings::new(IssuerUrl::new("https://auth.example.com").unwrap())
            .with_subdomain_suffix("example.com");

        let resolved = resolve_tenant(&repo, &settings, "a.example.com").unwrap();

        assert_eq!(resolved.tenant_id.unwrap().as_str(), "t-1");
    }

    #[test]
    fn propagates_directory_failures() {
        let mut repo = MockRepository::new();
        repo.expect_find_tenant_by_host().times(1).returning(|_| {
            Err(RepositoryError::ConstraintViolation(
                "host mapped twice".to_string(),
            ))
        });

        let settings = TenancySettings::new(IssuerUrl::new("https://auth.example.com").unwrap());

        let result = resolve_tenant(&repo, &settings, "a.example.com");

        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }
}
