//! Configuration model loaded from external sources.

use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::tenant::{TenancySettings, TenantMapping};
use crate::domain::types::{HostName, IssuerUrl, TenantId, TenantName, TypeConstraintError};
use crate::repository::StaticTenantDirectory;
use crate::repository::errors::RepositoryError;

fn default_page_size() -> usize {
    10
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid value for {field}: {source}")]
    InvalidValue {
        field: &'static str,
        source: TypeConstraintError,
    },

    #[error("invalid tenant table: {0}")]
    Directory(#[from] RepositoryError),
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    pub multi_tenancy: MultiTenancyConfig,
}

impl ServerConfig {
    /// Loads `{dir}/default.*`, then `{dir}/{app_env}.*` if present, then
    /// `APP_*` environment variables.
    pub fn load(dir: &str, app_env: &str) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")))
            .add_source(config::File::with_name(&format!("{dir}/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?;

        Ok(settings.try_deserialize::<ServerConfig>()?)
    }
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Tenant routing table and issuer defaults.
pub struct MultiTenancyConfig {
    #[validate(url)]
    pub default_issuer: String,
    pub subdomain_suffix: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub tenants: Vec<TenantConfig>,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct TenantConfig {
    #[validate(length(min = 1))]
    pub tenant_id: String,
    pub name: Option<String>,
    pub host: Option<String>,
    #[validate(url)]
    pub issuer: Option<String>,
}

fn invalid(field: &'static str) -> impl Fn(TypeConstraintError) -> ConfigError {
    move |source| ConfigError::InvalidValue { field, source }
}

impl TryFrom<TenantConfig> for TenantMapping {
    type Error = ConfigError;

    fn try_from(tenant: TenantConfig) -> Result<Self, Self::Error> {
        let mut mapping = TenantMapping::new(
            TenantId::new(tenant.tenant_id).map_err(invalid("tenants.tenant_id"))?,
        );
        if let Some(name) = tenant.name {
            mapping = mapping.with_name(TenantName::new(name).map_err(invalid("tenants.name"))?);
        }
        if let Some(host) = tenant.host {
            mapping = mapping.with_host(HostName::new(host).map_err(invalid("tenants.host"))?);
        }
        if let Some(issuer) = tenant.issuer {
            mapping =
                mapping.with_issuer(IssuerUrl::new(issuer).map_err(invalid("tenants.issuer"))?);
        }
        Ok(mapping)
    }
}

impl MultiTenancyConfig {
    /// Validates the table and splits it into resolver settings and a directory.
    pub fn into_parts(self) -> Result<(TenancySettings, StaticTenantDirectory), ConfigError> {
        self.validate()?;

        let default_issuer =
            IssuerUrl::new(self.default_issuer).map_err(invalid("default_issuer"))?;
        let mut settings = TenancySettings::new(default_issuer);
        if let Some(suffix) = self
            .subdomain_suffix
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            settings = settings.with_subdomain_suffix(suffix);
        }

        let tenants = self
            .tenants
            .into_iter()
            .map(TenantMapping::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let directory = StaticTenantDirectory::new(tenants)?;

        Ok((settings, directory))
    }
}
