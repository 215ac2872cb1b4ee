//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (normalized host names, absolute
//! issuer URLs, sanitized markup) so that once a value reaches the domain layer
//! it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateUrl;

use crate::sanitize::clean_rich_text;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Provided host could not be used as a tenant host.
    #[error("invalid host name")]
    InvalidHost,
    /// Provided url failed format validation.
    #[error("invalid url address")]
    InvalidUrl,
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

macro_rules! string_newtype_impls {
    ($name:ident) => {
        impl $name {
            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

/// Tenant identifier issued by the identity backend (usually a GUID).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub struct TenantId(String);

impl TenantId {
    /// Constructs a trimmed, non-empty identifier without inner whitespace.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let inner = NonEmptyString::new(value)?.into_inner();
        if inner.chars().any(char::is_whitespace) {
            return Err(TypeConstraintError::InvalidValue(inner));
        }
        Ok(Self(inner))
    }
}

string_newtype_impls!(TenantId);

/// Tenant name, matched case-insensitively and stored lower-cased.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub struct TenantName(String);

impl TenantName {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let inner = NonEmptyString::new(value)?;
        Ok(Self(inner.as_str().to_lowercase()))
    }
}

string_newtype_impls!(TenantName);

/// Host name taken from a `Host` header: lower-cased, without port or trailing dot.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub struct HostName(String);

impl HostName {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let raw = NonEmptyString::new(value)?.into_inner().to_lowercase();

        let host = if let Some(rest) = raw.strip_prefix('[') {
            // Bracketed IPv6 literal, optionally followed by a port.
            match rest.split_once(']') {
                Some((address, _port)) => format!("[{address}]"),
                None => return Err(TypeConstraintError::InvalidHost),
            }
        } else {
            match raw.rsplit_once(':') {
                Some((name, port))
                    if !name.contains(':') && port.chars().all(|c| c.is_ascii_digit()) =>
                {
                    name.to_string()
                }
                Some(_) => return Err(TypeConstraintError::InvalidHost),
                None => raw,
            }
        };

        let host = host.trim_end_matches('.');
        if host.is_empty() || host == "[]" {
            return Err(TypeConstraintError::InvalidHost);
        }
        if !host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | '[' | ']' | ':'))
        {
            return Err(TypeConstraintError::InvalidHost);
        }

        Ok(Self(host.to_string()))
    }

    /// Returns the leading label when this host ends with `suffix`.
    ///
    /// `acme.admin.example.com` with suffix `.admin.example.com` yields `acme`;
    /// nested labels (`a.b.admin.example.com`) do not match.
    pub fn subdomain_of(&self, suffix: &str) -> Option<&str> {
        let suffix = suffix.trim().trim_end_matches('.').to_lowercase();
        let suffix = suffix.strip_prefix('.').unwrap_or(&suffix);
        if suffix.is_empty() {
            return None;
        }

        let label = self.0.strip_suffix(suffix)?.strip_suffix('.')?;
        if label.is_empty() || label.contains('.') {
            None
        } else {
            Some(label)
        }
    }
}

string_newtype_impls!(HostName);

/// Absolute `http(s)` URL of an OpenID issuer, stored without a trailing slash.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub struct IssuerUrl(String);

impl IssuerUrl {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let url = NonEmptyString::new(value)?.into_inner();
        let url = url.trim_end_matches('/');

        if !url.validate_url() || !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(TypeConstraintError::InvalidUrl);
        }
        Ok(Self(url.to_string()))
    }
}

string_newtype_impls!(IssuerUrl);

/// Editor markup that went through the rich-text sanitize pipeline.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Hash)]
pub struct RichTextHtml(String);

impl RichTextHtml {
    /// Sanitizes and normalizes `value`, rejecting markup that cleans to nothing.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let cleaned = clean_rich_text(&value.into());
        if cleaned.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(cleaned))
    }
}

string_newtype_impls!(RichTextHtml);
