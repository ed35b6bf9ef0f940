//! Domain logic shared across the bloomcart admin gateway.
//!
//! This crate has no async code and no HTTP dependencies so it can be used
//! by the API layer, the upstream client, and any future CLI tooling.

pub mod error;
pub mod listing;
pub mod slug;
pub mod types;
pub mod upload;
