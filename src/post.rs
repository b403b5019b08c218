//! Authenticated POST

use crate::{
    auth::AuthScheme,
    content_type::ContentType,
    headers::{AUTHORIZATION, CONTENT_TYPE, EmptyHeaderPolicy, Headers},
    transport::{Payload, Transport},
    utils::Method,
};
use reqwest::Client;

/// POST utility, produced by [`use_post`](crate::use_post)
#[derive(Debug, Clone)]
pub struct Post<T = Client> {
    transport: T,
    empty_headers: EmptyHeaderPolicy,
}

impl<T: Transport> Post<T> {
    /// Delegate requests to `transport`
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            empty_headers: EmptyHeaderPolicy::default(),
        }
    }

    /// Choose whether headers without a selector are sent empty or left out
    pub fn empty_headers(mut self, policy: EmptyHeaderPolicy) -> Self {
        self.empty_headers = policy;
        self
    }

    pub fn policy(&self) -> EmptyHeaderPolicy {
        self.empty_headers
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `data` to `url` with a POST.
    ///
    /// With the default [`EmptyHeaderPolicy::Send`], `Authorization` and
    /// `Content-Type` are always present and hold `""` when their selector is
    /// missing. The body is not checked against `content_type`.
    pub async fn post(
        &self,
        url: &str,
        data: impl Into<Payload>,
        content_type: Option<ContentType>,
        scheme: Option<AuthScheme>,
        token: Option<&str>,
    ) -> std::result::Result<T::Response, T::Error> {
        let payload = data.into();
        let headers = Headers::for_post(content_type, scheme, token, self.empty_headers);
        tracing::debug!(
            method = %Method::Post,
            url,
            scheme = scheme.map(AuthScheme::label),
            content_type = content_type.map(ContentType::as_str),
            authorized = headers.get(AUTHORIZATION).is_some_and(|value| !value.is_empty()),
            typed = headers.get(CONTENT_TYPE).is_some_and(|value| !value.is_empty()),
            "sending request"
        );
        self.transport.post(url, payload, headers).await
    }
}
