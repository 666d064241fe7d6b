//! Item Service Bindings
//!
//! Frontend bindings to the backend HTTP API, organized by domain.

mod item;

use gloo_net::http::Request;
use thiserror::Error;
use web_sys::RequestMode;

pub use item::*;

/// Errors from a single API call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The fetch promise rejected (offline, DNS, CORS refusal, ...).
    #[error("network error requesting {url}: {message}")]
    Network { url: String, message: String },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    /// Body was not JSON or not the expected shape.
    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

fn transport_error(url: &str, err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::SerdeError(e) => ApiError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        },
        other => ApiError::Network {
            url: url.to_string(),
            message: other.to_string(),
        },
    }
}

/// `None` for 2xx, otherwise the status error.
fn status_error(url: &str, status: u16) -> Option<ApiError> {
    if (200..300).contains(&status) {
        None
    } else {
        Some(ApiError::Status {
            url: url.to_string(),
            status,
        })
    }
}

/// `GET url` and return the body text of a 2xx response.
async fn get_text(url: &str) -> Result<String, ApiError> {
    let response = Request::get(url)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
        .mode(RequestMode::Cors)
        .send()
        .await
        .map_err(|e| transport_error(url, e))?;

    if let Some(err) = status_error(url, response.status()) {
        return Err(err);
    }

    response.text().await.map_err(|e| transport_error(url, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error() {
        assert_eq!(status_error("u", 200), None);
        assert_eq!(status_error("u", 204), None);
        assert_eq!(
            status_error("http://x/items", 502),
            Some(ApiError::Status { url: "http://x/items".into(), status: 502 })
        );
        assert!(status_error("u", 404).is_some());
    }

    #[test]
    fn test_transport_error_is_network() {
        let err = transport_error("http://x/items", gloo_net::Error::GlooError("Failed to fetch".into()));
        assert_eq!(
            err,
            ApiError::Network { url: "http://x/items".into(), message: "Failed to fetch".into() }
        );
    }

    #[test]
    fn test_serde_error_is_decode() {
        let serde_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err = transport_error("http://x/items", gloo_net::Error::SerdeError(serde_err));
        assert!(matches!(err, ApiError::Decode { ref url, .. } if url == "http://x/items"));
    }
}
