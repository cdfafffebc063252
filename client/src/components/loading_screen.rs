//! Full-page loading indicator.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__label">"Loading..."</div>
        </div>
    }
}
