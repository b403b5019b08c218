use crate::headers::Headers;
use reqwest::{Client, RequestBuilder};

pub(crate) fn build_request(
    client: &Client,
    method: Method,
    url: &str,
    headers: Headers,
) -> RequestBuilder {
    let mut req_builder = match method {
        Method::Get => client.get(url),
        Method::Post => client.post(url),
    };
    for (name, value) in headers {
        req_builder = req_builder.header(name, value);
    }
    req_builder
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Method {
    Get,
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}
