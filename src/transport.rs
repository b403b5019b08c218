//! HTTP client seam
//!
//! [`Get`](crate::Get) and [`Post`](crate::Post) only build headers. The network
//! round trip belongs to a [`Transport`], whose responses and errors are handed
//! back to the caller as they are.

use crate::{
    headers::Headers,
    utils::{Method, build_request},
};
use reqwest::{Client, Response};
use std::future::Future;

/// The HTTP client a request is delegated to
pub trait Transport {
    type Response;
    type Error;

    fn get(
        &self,
        url: &str,
        headers: Headers,
    ) -> impl Future<Output = std::result::Result<Self::Response, Self::Error>> + Send;

    fn post(
        &self,
        url: &str,
        payload: Payload,
        headers: Headers,
    ) -> impl Future<Output = std::result::Result<Self::Response, Self::Error>> + Send;
}

/// POST body, handed to the transport without inspection
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Payload {
    #[default]
    Empty,
    Json(serde_json::Value),
    Text(String),
    Bytes(Vec<u8>),
    Form(Vec<(String, String)>),
}

impl From<serde_json::Value> for Payload {
    fn from(value: serde_json::Value) -> Self {
        Payload::Json(value)
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_owned())
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Payload::Bytes(bytes)
    }
}

impl From<&[u8]> for Payload {
    fn from(bytes: &[u8]) -> Self {
        Payload::Bytes(bytes.to_vec())
    }
}

impl From<()> for Payload {
    fn from(_: ()) -> Self {
        Payload::Empty
    }
}

// Headers go on before the body so `json` keeps a caller chosen Content-Type.
impl Transport for Client {
    type Response = Response;
    type Error = reqwest::Error;

    async fn get(&self, url: &str, headers: Headers) -> Result<Response, reqwest::Error> {
        build_request(self, Method::Get, url, headers).send().await
    }

    async fn post(
        &self,
        url: &str,
        payload: Payload,
        headers: Headers,
    ) -> Result<Response, reqwest::Error> {
        let req_builder = build_request(self, Method::Post, url, headers);
        let req_builder = match payload {
            Payload::Empty => req_builder,
            Payload::Json(value) => req_builder.json(&value),
            Payload::Text(text) => req_builder.body(text),
            Payload::Bytes(bytes) => req_builder.body(bytes),
            Payload::Form(pairs) => req_builder.form(&pairs),
        };
        req_builder.send().await
    }
}
