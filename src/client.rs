//! Client configuration and the `use_get` / `use_post` factories

use crate::{error::Result, get::Get, headers::EmptyHeaderPolicy, post::Post};
use reqwest::Client;
use serde::{Deserialize, Serialize};

static APP_USER_AGENT: &str =
    concat!("RS", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// Settings for the reqwest client behind [`Get`] and [`Post`].
///
/// No timeout is set, reqwest's own defaults apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// `User-Agent` sent with every request
    pub user_agent: String,
    /// How POST treats `Authorization` / `Content-Type` without a selector
    pub empty_headers: EmptyHeaderPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: APP_USER_AGENT.to_owned(),
            empty_headers: EmptyHeaderPolicy::default(),
        }
    }
}

impl ClientConfig {
    pub fn build_client(&self) -> Result<Client> {
        Ok(Client::builder().user_agent(&self.user_agent).build()?)
    }

    /// A GET utility backed by a freshly built client
    pub fn get(&self) -> Result<Get> {
        Ok(Get::with_transport(self.build_client()?))
    }

    /// A POST utility backed by a freshly built client
    pub fn post(&self) -> Result<Post> {
        Ok(Post::with_transport(self.build_client()?).empty_headers(self.empty_headers))
    }
}

/// Create a GET utility with the default configuration
pub fn use_get() -> Result<Get> {
    ClientConfig::default().get()
}

/// Create a POST utility with the default configuration
pub fn use_post() -> Result<Post> {
    ClientConfig::default().post()
}
