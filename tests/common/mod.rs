use abp_admin::domain::tenant::{TenancySettings, TenantMapping};
use abp_admin::domain::types::{HostName, IssuerUrl, TenantId, TenantName};
use abp_admin::models::config::{MultiTenancyConfig, ServerConfig};
use abp_admin::repository::StaticTenantDirectory;

pub fn tenancy() -> TenancySettings {
    TenancySettings::new(IssuerUrl::new("https://auth.example.com").unwrap())
        .with_subdomain_suffix(".admin.example.com")
}

pub fn directory() -> StaticTenantDirectory {
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

#[allow(dead_code)]
pub fn server_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        templates_dir: "templates/**/*".to_string(),
        default_page_size: 10,
        multi_tenancy: MultiTenancyConfig {
            default_issuer: "https://auth.example.com".to_string(),
            subdomain_suffix: Some(".admin.example.com".to_string()),
            tenants: vec![],
        },
    }
}
