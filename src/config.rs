//! API Configuration
//!
//! Backend address and asset paths, fixed at build time and passed
//! to components explicitly.

use log::LevelFilter;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};

use crate::models::Item;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:9000";

/// File name of the bundled fallback image, relative to `PUBLIC_URL`
const PLACEHOLDER_FILE: &str = "logo192.svg";

/// Characters escaped inside a single URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Characters escaped inside a query value
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
    placeholder_image: String,
    pub log_level: LevelFilter,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            placeholder_image: placeholder_path(""),
            log_level: LevelFilter::Info,
        }
    }

    /// Build from `API_URL`, `PUBLIC_URL` and `LOG_LEVEL` as seen by the compiler.
    pub fn from_env() -> Self {
        Self::from_vars(
            option_env!("API_URL"),
            option_env!("PUBLIC_URL"),
            option_env!("LOG_LEVEL"),
        )
    }

    fn from_vars(api_url: Option<&str>, public_url: Option<&str>, log_level: Option<&str>) -> Self {
        let base = api_url.filter(|s| !s.trim().is_empty()).unwrap_or(DEFAULT_API_URL);
        Self {
            base_url: normalize_base_url(base),
            placeholder_image: placeholder_path(public_url.unwrap_or("")),
            log_level: parse_level(log_level),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn placeholder_image(&self) -> &str {
        &self.placeholder_image
    }

    pub fn items_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    pub fn search_url(&self, keyword: &str) -> String {
        format!(
            "{}/search?keyword={}",
            self.base_url,
            utf8_percent_encode(keyword, QUERY_VALUE)
        )
    }

    pub fn image_url(&self, filename: &str) -> String {
        format!(
            "{}/image/{}",
            self.base_url,
            utf8_percent_encode(filename, PATH_SEGMENT)
        )
    }

    /// Image source for an item, falling back to the placeholder asset.
    pub fn image_src(&self, item: &Item) -> String {
        if item.has_image() {
            self.image_url(&item.image_filename)
        } else {
            self.placeholder_image().to_string()
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn placeholder_path(public_url: &str) -> String {
    format!("{}/{}", public_url.trim().trim_end_matches('/'), PLACEHOLDER_FILE)
}

fn parse_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(LevelFilter::Info)
}
