//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: it holds a controller from
//! `state` in a signal, drives its async flows and hands the resulting
//! effects to the app. Rendering details live in `components`.

pub mod editor;
pub mod feed;
pub mod landing;
pub mod post_view;
pub mod profile;
pub mod settings;
