//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and shared widgets while reading shared
//! state from Leptos context providers.

pub mod avatar;
pub mod comment_thread;
pub mod loading_screen;
pub mod markdown_view;
pub mod nav_bar;
pub mod post_card;
pub mod share_menu;
pub mod toaster;
