//! In-memory transport for unit tests

use crate::{
    headers::Headers,
    transport::{Payload, Transport},
};
use std::{collections::HashMap, sync::Mutex, time::Duration};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MockError(pub String);

impl MockError {
    pub fn new(message: &str) -> Self {
        Self(message.to_string())
    }
}

/// A request as the transport received it
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Recorded {
    pub method: &'static str,
    pub url: String,
    pub payload: Option<Payload>,
    pub headers: Headers,
}

type Reply = Result<MockResponse, MockError>;

#[derive(Debug, Default)]
pub(crate) struct MockTransport {
    routes: HashMap<(&'static str, String), Reply>,
    delays: HashMap<String, Duration>,
    recorded: Mutex<Vec<Recorded>>,
}

impl MockTransport {
    pub fn respond(mut self, method: &'static str, url: &str, reply: Reply) -> Self {
        self.routes.insert((method, url.to_string()), reply);
        self
    }

    pub fn delay(mut self, url: &str, delay: Duration) -> Self {
        self.delays.insert(url.to_string(), delay);
        self
    }

    pub fn recorded(&self) -> Vec<Recorded> {
        self.recorded.lock().unwrap().clone()
    }

    async fn handle(
        &self,
        method: &'static str,
        url: &str,
        payload: Option<Payload>,
        headers: Headers,
    ) -> Reply {
        self.recorded.lock().unwrap().push(Recorded {
            method,
            url: url.to_string(),
            payload,
            headers,
        });
        if let Some(delay) = self.delays.get(url) {
            tokio::time::sleep(*delay).await;
        }
        self.routes
            .get(&(method, url.to_string()))
            .cloned()
            .unwrap_or_else(|| Err(MockError(format!("no route for {method} {url}"))))
    }
}

impl Transport for MockTransport {
    type Response = MockResponse;
    type Error = MockError;

    async fn get(&self, url: &str, headers: Headers) -> Reply {
        self.handle("GET", url, None, headers).await
    }

    async fn post(&self, url: &str, payload: Payload, headers: Headers) -> Reply {
        self.handle("POST", url, Some(payload), headers).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AuthScheme, ContentType, Get, Post};
    use std::time::Instant;

    #[tokio::test]
    async fn test_concurrent_calls_are_independent() {
        let transport = MockTransport::default()
            .respond("GET", "https://a.test/one", Ok(MockResponse::new(200, "one")))
            .respond("GET", "https://a.test/two", Err(MockError::new("two failed")))
            .delay("https://a.test/one", Duration::from_millis(200))
            .delay("https://a.test/two", Duration::from_millis(200));
        let get = Get::with_transport(transport);

        let start = Instant::now();
        let (one, two) = tokio::join!(
            get.get("https://a.test/one", Some(AuthScheme::Basic), Some("u1")),
            get.get("https://a.test/two", Some(AuthScheme::Jwt), Some("u2")),
        );
        assert!(start.elapsed() < Duration::from_millis(380));
        assert_eq!(one, Ok(MockResponse::new(200, "one")));
        assert_eq!(two, Err(MockError::new("two failed")));

        let recorded = get.transport().recorded();
        let auth_for = |url: &str| {
            recorded
                .iter()
                .find(|r| r.url == url)
                .and_then(|r| r.headers.get("Authorization").map(str::to_owned))
        };
        assert_eq!(auth_for("https://a.test/one").as_deref(), Some("Basic u1"));
        assert_eq!(auth_for("https://a.test/two").as_deref(), Some("Bearer u2"));

        let post = Post::with_transport(MockTransport::default().respond(
            "POST",
            "https://a.test/three",
            Ok(MockResponse::new(201, "three")),
        ));
        let (three, missing) = tokio::join!(
            post.post("https://a.test/three", "x", Some(ContentType::Json), None, None),
            post.post("https://a.test/four", "y", None, None, None),
        );
        assert_eq!(three, Ok(MockResponse::new(201, "three")));
        assert_eq!(
            missing,
            Err(MockError::new("no route for POST https://a.test/four"))
        );
    }
}
