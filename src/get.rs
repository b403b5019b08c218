//! Authenticated GET

use crate::{
    auth::AuthScheme,
    headers::{AUTHORIZATION, Headers},
    transport::Transport,
    utils::Method,
};
use reqwest::Client;

/// GET utility, produced by [`use_get`](crate::use_get)
#[derive(Debug, Clone)]
pub struct Get<T = Client> {
    transport: T,
}

impl<T: Transport> Get<T> {
    /// Delegate requests to `transport`
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a GET to `url`.
    ///
    /// `Authorization` is only sent when both `scheme` and a non-empty `token`
    /// are given. The transport's response or error is returned unchanged.
    pub async fn get(
        &self,
        url: &str,
        scheme: Option<AuthScheme>,
        token: Option<&str>,
    ) -> std::result::Result<T::Response, T::Error> {
        let headers = Headers::for_get(scheme, token);
        tracing::debug!(
            method = %Method::Get,
            url,
            scheme = scheme.map(AuthScheme::label),
            authorized = headers.contains(AUTHORIZATION),
            "sending request"
        );
        self.transport.get(url, headers).await
    }
}
