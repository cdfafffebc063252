//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns and pure formatting from page and
//! component logic so the latter stays testable.

pub mod auth;
pub mod browser;
pub mod color;
pub mod date;
pub mod effects;
pub mod markdown;
pub mod share;
pub mod text;
