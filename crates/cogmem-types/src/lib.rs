//! Core types and traits for the CogmemAi memory API.
//!
//! Request DTOs serialize to the JSON bodies and query strings the hosted service accepts,
//! and deserialize on the mock service side so both ends share one definition.

mod dto;
mod traits;

pub use dto::*;
pub use traits::*;
