//! Share links for the post viewer.
//!
//! Everything here is string work on the current page URL; nothing is sent
//! to the API.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use url::Url;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareTarget {
    Facebook,
    Twitter,
    LinkedIn,
    WhatsApp,
}

impl ShareTarget {
    pub const ALL: [Self; 4] = [Self::Facebook, Self::Twitter, Self::LinkedIn, Self::WhatsApp];

    pub fn label(self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
            Self::LinkedIn => "LinkedIn",
            Self::WhatsApp => "WhatsApp",
        }
    }

    /// Share-intent URL for `page_url` titled `title`.
    pub fn link(self, page_url: &str, title: &str) -> String {
        let (base, params): (&str, Vec<(&str, String)>) = match self {
            Self::Facebook => ("https://www.facebook.com/sharer/sharer.php", vec![("u", page_url.to_owned())]),
            Self::Twitter => (
                "https://twitter.com/intent/tweet",
                vec![("url", page_url.to_owned()), ("text", title.to_owned())],
            ),
            Self::LinkedIn => ("https://www.linkedin.com/sharing/share-offsite/", vec![("url", page_url.to_owned())]),
            Self::WhatsApp => ("https://api.whatsapp.com/send", vec![("text", format!("{title} {page_url}"))]),
        };
        match Url::parse_with_params(base, &params) {
            Ok(url) => url.to_string(),
            Err(_) => base.to_owned(),
        }
    }
}

/// The URL that gets shared: the current page without its fragment.
pub fn share_url(href: &str) -> String {
    crate::state::auth_exchange::strip_fragment(href)
}
