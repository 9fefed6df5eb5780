//! HTTP transport for the API clients.
//!
//! Requests are single-shot: no caching, retries, or rate limiting.

mod client;

pub use client::{HttpClient, MockClient, MockResponse, ReqwestClient, ReqwestClientBuilder};

/// Append query parameters to an endpoint URL, encoding the values.
pub fn endpoint_url(
    base: &str,
    path: &str,
    query: &[(&str, &str)],
) -> Result<String, url::ParseError> {
    let mut url = url::Url::parse(&format!("{}/{}", base.trim_end_matches('/'), path))?;
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_without_query() {
        assert_eq!(
            endpoint_url("https://www.themealdb.com/api/json/v1/1/", "random.php", &[]).unwrap(),
            "https://www.themealdb.com/api/json/v1/1/random.php"
        );
    }

    #[test]
    fn test_endpoint_url_encodes_values() {
        assert_eq!(
            endpoint_url("https://example.com/api", "search.php", &[("s", "mac & cheese")])
                .unwrap(),
            "https://example.com/api/search.php?s=mac+%26+cheese"
        );
    }

    #[test]
    fn test_endpoint_url_rejects_bad_base() {
        assert!(endpoint_url("not a url", "random.php", &[]).is_err());
    }
}
