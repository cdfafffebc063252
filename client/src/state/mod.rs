//! Client application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` and `toast` are app-wide and provided through Leptos context.
//! The remaining modules are per-page controllers: plain structs with
//! synchronous `begin_*`/`finish_*` transitions plus async flows generic over
//! [`crate::net::api::Api`]. Pages hold them in `RwSignal`s and apply the
//! returned [`view::Effects`].

pub mod auth_exchange;
pub mod editor;
pub mod feed;
pub mod post_view;
pub mod profile;
pub mod session;
pub mod settings;
pub mod toast;
pub mod view;
