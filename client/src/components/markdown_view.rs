//! Rendered markdown block.

use leptos::prelude::*;

use crate::util::markdown::render_markdown_html;

#[component]
pub fn MarkdownView(#[prop(into)] content: Signal<String>) -> impl IntoView {
    view! { <div class="prose" inner_html=move || render_markdown_html(&content.get())></div> }
}
