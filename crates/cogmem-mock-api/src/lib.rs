//! In-memory stand-in for the CogmemAi REST API.
//!
//! Serves every route the client calls under `/cogmemai/`, with bearer-key auth. It keeps
//! records only: search is a substring filter, and extraction and promotion answer empty.

pub mod server;
pub mod store;

pub use server::{router, AppState};
pub use store::{MemoryStore, StoreError};
