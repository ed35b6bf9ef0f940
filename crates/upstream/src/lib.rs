//! HTTP client for the external e-commerce backend ("upstream").
//!
//! The backend is the system of record for every entity the dashboard
//! manages; this crate wraps its REST API behind a typed client, hides its
//! inconsistent response envelopes, and models the admin auth session.

pub mod auth;
pub mod client;
pub mod envelope;
pub mod error;
pub mod resource;

pub use client::UpstreamClient;
pub use error::UpstreamError;
