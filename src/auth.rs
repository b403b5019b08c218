//! Authentication schemes
//!
//! Maps a scheme label and a credential token to an `Authorization` header value.
//!
//! | Scheme          | Header value                 |
//! |-----------------|------------------------------|
//! | `Basic`         | `Basic <token>`              |
//! | `Bearer Token`  | `Bearer <token>`             |
//! | `API Key`       | `API-Key <token>`            |
//! | `Digest`        | `Digest <token>`             |
//! | `JWT`           | `Bearer <token>`             |
//! | `AWS Signature` | `AWS4-HMAC-SHA256 <token>`   |
//! | `OAuth`         | `OAuth <token>`              |

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Authentication scheme used to format the `Authorization` header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthScheme {
    Basic,
    #[serde(rename = "Bearer Token")]
    BearerToken,
    #[serde(rename = "API Key")]
    ApiKey,
    Digest,
    #[serde(rename = "JWT")]
    Jwt,
    #[serde(rename = "AWS Signature")]
    AwsSignature,
    #[serde(rename = "OAuth")]
    OAuth,
}

impl AuthScheme {
    pub const ALL: [AuthScheme; 7] = [
        AuthScheme::Basic,
        AuthScheme::BearerToken,
        AuthScheme::ApiKey,
        AuthScheme::Digest,
        AuthScheme::Jwt,
        AuthScheme::AwsSignature,
        AuthScheme::OAuth,
    ];

    /// Human readable label, e.g. `Bearer Token`
    pub const fn label(self) -> &'static str {
        match self {
            AuthScheme::Basic => "Basic",
            AuthScheme::BearerToken => "Bearer Token",
            AuthScheme::ApiKey => "API Key",
            AuthScheme::Digest => "Digest",
            AuthScheme::Jwt => "JWT",
            AuthScheme::AwsSignature => "AWS Signature",
            AuthScheme::OAuth => "OAuth",
        }
    }

    /// Prefix placed in front of the token on the wire
    pub const fn prefix(self) -> &'static str {
        match self {
            AuthScheme::Basic => "Basic",
            AuthScheme::BearerToken | AuthScheme::Jwt => "Bearer",
            AuthScheme::ApiKey => "API-Key",
            AuthScheme::Digest => "Digest",
            AuthScheme::AwsSignature => "AWS4-HMAC-SHA256",
            AuthScheme::OAuth => "OAuth",
        }
    }

    /// Format `token` as an `Authorization` header value
    pub fn header_value(self, token: &str) -> String {
        format!("{} {}", self.prefix(), token)
    }
}

impl std::fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AuthScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AuthScheme::ALL
            .into_iter()
            .find(|scheme| scheme.label() == s)
            .ok_or_else(|| Error::UnknownAuthScheme(s.to_string()))
    }
}

/// Build the `Authorization` header value.
///
/// Returns `None` unless both a scheme and a non-empty token are given.
pub fn authorization(scheme: Option<AuthScheme>, token: Option<&str>) -> Option<String> {
    match (scheme, token) {
        (Some(scheme), Some(token)) if !token.is_empty() => Some(scheme.header_value(token)),
        _ => None,
    }
}
