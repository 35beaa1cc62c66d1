//! Async client for the CogmemAi memory API.
//!
//! [`CogmemClient`] turns typed method calls into authenticated JSON requests and hands
//! back the service's JSON unchanged. Requests go through a [`Transport`]; the default is
//! [`HttpTransport`] (reqwest), and tests can swap in a scripted one.

mod client;
mod config;
mod endpoints;
mod http;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use client::CogmemClient;
pub use cogmem_types::*;
pub use config::{ClientConfig, API_KEY_PREFIX, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use http::HttpTransport;

#[cfg(any(test, feature = "test-util"))]
pub use mock::MockTransport;
