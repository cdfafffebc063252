//! Runtime configuration for the browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders `<meta name="nightblog:api-base">` and
//! `<meta name="nightblog:auth-url">` into the HTML shell. The hydrated client
//! reads them back here; during server rendering the same values come from
//! the host's environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_AUTH_URL: &str = "https://auth.emergentagent.com/";

pub const API_BASE_META: &str = "nightblog:api-base";
pub const AUTH_URL_META: &str = "nightblog:auth-url";

pub const API_BASE_ENV: &str = "NIGHTBLOG_API_BASE";
pub const AUTH_URL_ENV: &str = "NIGHTBLOG_AUTH_URL";

/// Where the API lives and where sign-in starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub auth_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned(), auth_url: DEFAULT_AUTH_URL.to_owned() }
    }
}

impl ClientConfig {
    /// Build from optional raw values; blanks fall back to defaults.
    pub fn from_values(api_base: Option<String>, auth_url: Option<String>) -> Self {
        let pick = |value: Option<String>, default: &str| {
            value
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };
        Self { api_base: pick(api_base, DEFAULT_API_BASE), auth_url: pick(auth_url, DEFAULT_AUTH_URL) }
    }

    /// Read from the shell's meta tags (browser) or the environment (server).
    pub fn load() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::from_values(read_meta(API_BASE_META), read_meta(AUTH_URL_META))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::from_values(std::env::var(API_BASE_ENV).ok(), std::env::var(AUTH_URL_ENV).ok())
        }
    }

    /// Identity provider URL that returns to `{origin}/feed`.
    pub fn login_redirect_url(&self, origin: &str) -> String {
        let return_to = format!("{}/feed", origin.trim_end_matches('/'));
        match url::Url::parse(&self.auth_url) {
            Ok(mut url) => {
                url.query_pairs_mut().append_pair("redirect", &return_to);
                url.to_string()
            }
            Err(_) => {
                let encoded: String = url::form_urlencoded::byte_serialize(return_to.as_bytes()).collect();
                format!("{}?redirect={encoded}", self.auth_url)
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn read_meta(name: &str) -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let element = document.query_selector(&format!("meta[name=\"{name}\"]")).ok()??;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    Some(meta.content())
}
