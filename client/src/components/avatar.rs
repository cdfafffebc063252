//! Round avatar with an initial fallback.

use leptos::prelude::*;

use crate::net::types::initial_of;

#[component]
pub fn Avatar(
    picture: Option<String>,
    name: String,
    #[prop(default = "avatar")] class: &'static str,
) -> impl IntoView {
    let initial = initial_of(&name);
    match picture.filter(|p| !p.is_empty()) {
        Some(src) => view! { <img class=class src=src alt=name/> }.into_any(),
        None => view! { <span class=format!("{class} avatar--fallback")>{initial}</span> }.into_any(),
    }
}
