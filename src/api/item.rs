//! Item Endpoints
//!
//! `GET /items` and `GET /search`, both answering with an item list body.

use crate::config::ApiConfig;
use crate::models::{Item, ItemListResponse};
use super::{get_text, ApiError};

/// Which collection to ask the backend for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemQuery {
    All,
    Keyword(String),
}

impl ItemQuery {
    /// Blank keywords mean "all items".
    pub fn from_keyword(keyword: &str) -> Self {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            Self::All
        } else {
            Self::Keyword(keyword.to_string())
        }
    }

    pub fn url(&self, config: &ApiConfig) -> String {
        match self {
            Self::All => config.items_url(),
            Self::Keyword(kw) => config.search_url(kw),
        }
    }
}

/// Decode a list body; `url` is only used for the error message.
pub fn decode_items(url: &str, body: &str) -> Result<Vec<Item>, ApiError> {
    serde_json::from_str::<ItemListResponse>(body)
        .map(|resp| resp.items)
        .map_err(|e| ApiError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
}

pub async fn fetch_items(config: &ApiConfig, query: &ItemQuery) -> Result<Vec<Item>, ApiError> {
    let url = query.url(config);
    log::debug!("[api] GET {}", url);
    let body = get_text(&url).await?;
    decode_items(&url, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_from_keyword() {
        assert_eq!(ItemQuery::from_keyword(""), ItemQuery::All);
        assert_eq!(ItemQuery::from_keyword("   "), ItemQuery::All);
        assert_eq!(ItemQuery::from_keyword(" bike "), ItemQuery::Keyword("bike".into()));
    }

    #[test]
    fn test_query_url() {
        let config = ApiConfig::default();
        assert_eq!(ItemQuery::All.url(&config), "http://127.0.0.1:9000/items");
        assert_eq!(
            ItemQuery::Keyword("bike".into()).url(&config),
            "http://127.0.0.1:9000/search?keyword=bike"
        );
    }

    #[test]
    fn test_decode_example_body() {
        let body = r#"{"items":[{"id":1,"name":"Bike","category":"Sports","image_filename":""}]}"#;
        let items = decode_items("http://x/items", body).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Bike");
        assert_eq!(items[0].category, "Sports");
    }

    #[test]
    fn test_decode_non_json_is_decode_error() {
        let err = decode_items("http://x/items", "<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode { ref url, .. } if url == "http://x/items"));
        assert!(err.to_string().starts_with("could not decode response from http://x/items"));
    }

    #[test]
    fn test_decode_plain_text_not_found() {
        // the backend answers some misses with 200 and a text body
        assert!(decode_items("u", "Item not found \n").is_err());
    }
}
