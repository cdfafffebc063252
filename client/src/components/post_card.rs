//! Post summary card used by the feed and profile pages.

use leptos::prelude::*;

use crate::net::types::Post;
use crate::routes::AppRoute;
use crate::util::date::short_date;
use crate::util::text::excerpt;

#[component]
pub fn PostCard(post: Post, excerpt_chars: usize, #[prop(optional)] show_author: bool) -> impl IntoView {
    let post_href = AppRoute::Post(post.id.clone()).path();
    let summary = excerpt(&post.content, excerpt_chars);
    let date = short_date(&post.created_at);
    let likes = post.likes.max(0);
    let views = post.views.max(0);

    let cover = post.cover_image.clone().map(|src| {
        view! {
            <a href=post_href.clone() class="post-card__cover">
                <img src=src alt=post.title.clone()/>
            </a>
        }
    });
    let author = show_author.then(|| {
        view! {
            <a href=AppRoute::Profile(post.username.clone()).path() class="post-card__author">
                {format!("@{}", post.username)}
            </a>
            <span class="post-card__dot">"·"</span>
        }
    });
    let draft = (!post.is_published).then(|| view! { <span class="post-card__badge">"Draft"</span> });

    view! {
        <article class="post-card">
            {cover}
            <div class="post-card__body">
                <div class="post-card__meta">
                    {author}
                    <span class="post-card__date">{date}</span>
                    {draft}
                </div>
                <a href=post_href class="post-card__title">
                    <h2>{post.title}</h2>
                </a>
                <p class="post-card__excerpt">{summary}</p>
                <div class="post-card__stats">
                    <span class="post-card__likes">{format!("♥ {likes}")}</span>
                    <span class="post-card__views">{format!("👁 {views}")}</span>
                </div>
            </div>
        </article>
    }
}
