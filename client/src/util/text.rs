//! Plain-text helpers for cards.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Characters of body text shown on a feed card.
pub const FEED_EXCERPT_CHARS: usize = 200;
/// Characters of body text shown on a profile card.
pub const PROFILE_EXCERPT_CHARS: usize = 150;

/// First `max_chars` characters of `content`, with `...` when cut.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    let mut chars = content.char_indices();
    match chars.nth(max_chars) {
        Some((cut, _)) => format!("{}...", content[..cut].trim_end()),
        None => content.to_owned(),
    }
}
