//! Networking modules for the NightBlog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the fetcher trait and its browser implementation, `error`
//! classifies failures, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
