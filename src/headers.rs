//! Request headers built per call

use crate::{
    auth::{AuthScheme, authorization},
    content_type::{ContentType, content_type},
};
use serde::{Deserialize, Serialize};

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";

/// What a POST does with a header whose selector was not given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyHeaderPolicy {
    /// Send the header with an empty value.
    #[default]
    Send,
    /// Leave the header out, as GET does.
    Omit,
}

/// Ordered header names and values for a single request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(Vec<(&'static str, String)>);

impl Headers {
    /// Headers for a GET: `Authorization` only when credentials are complete
    pub fn for_get(scheme: Option<AuthScheme>, token: Option<&str>) -> Self {
        let mut headers = Self::default();
        if let Some(value) = authorization(scheme, token) {
            headers.push(AUTHORIZATION, value);
        }
        headers
    }

    /// Headers for a POST: `Authorization` then `Content-Type`
    pub fn for_post(
        content: Option<ContentType>,
        scheme: Option<AuthScheme>,
        token: Option<&str>,
        policy: EmptyHeaderPolicy,
    ) -> Self {
        let mut headers = Self::default();
        let values = [
            (AUTHORIZATION, authorization(scheme, token)),
            (CONTENT_TYPE, content_type(content).map(str::to_owned)),
        ];
        for (name, value) in values {
            match (value, policy) {
                (Some(value), _) => headers.push(name, value),
                (None, EmptyHeaderPolicy::Send) => headers.push(name, String::new()),
                (None, EmptyHeaderPolicy::Omit) => {}
            }
        }
        headers
    }

    fn push(&mut self, name: &'static str, value: String) {
        self.0.push((name, value));
    }

    /// Value of the header `name`, compared ASCII case-insensitively
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(name, value)| (*name, value.as_str()))
    }
}

impl IntoIterator for Headers {
    type Item = (&'static str, String);
    type IntoIter = std::vec::IntoIter<(&'static str, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
