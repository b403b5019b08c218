#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

pub mod error;
pub use error::*;
pub mod auth;
pub use auth::*;
pub mod content_type;
pub use content_type::*;
pub mod headers;
pub use headers::*;
pub mod transport;
pub use transport::*;
pub mod get;
pub use get::*;
pub mod post;
pub use post::*;
pub mod client;
pub use client::*;
pub(crate) mod utils;
#[cfg(test)]
pub(crate) mod mock;
