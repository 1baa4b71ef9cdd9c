use std::time::Duration;

use reqwest::Client;

/// Bound on any single retailer call. The merge join tolerates a failed
/// branch but has no cancellation of its own, so a hung request must be
/// cut off here.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Shared HTTP client configuration for the retailer adapters.
pub fn build_http_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_default()
}

/// Appends one query parameter, tolerating URLs that already carry a
/// query string. Used for associate/affiliate tag construction.
pub fn append_query_param(url: &str, key: &str, value: &str) -> String {
    match url::Url::parse(url) {
        Ok(mut parsed) => {
            parsed.query_pairs_mut().append_pair(key, value);
            parsed.to_string()
        }
        Err(_) => {
            let separator = if url.contains('?') { '&' } else { '?' };
            format!("{}{}{}={}", url, separator, key, value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_append_param_to_bare_url() {
        assert_eq!(
            append_query_param("https://www.amazon.com/dp/B0X", "tag", "campus-20"),
            "https://www.amazon.com/dp/B0X?tag=campus-20"
        );
    }

    #[test]
    fn should_append_param_to_url_with_existing_query() {
        let url = append_query_param("https://www.ebay.com/itm/1?hash=abc", "campid", "555");
        assert_eq!(url, "https://www.ebay.com/itm/1?hash=abc&campid=555");
    }
}
