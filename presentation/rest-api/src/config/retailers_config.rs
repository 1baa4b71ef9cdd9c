use std::env;

use retail::amazon::AmazonConfig;
use retail::ebay::EbayConfig;

/// Per-retailer enablement and credentials.
///
/// Missing credentials are deliberately not an error at startup: the
/// adapter is constructed anyway, fails its availability probe, and the
/// registry leaves it out.
pub struct RetailersConfig {
    pub amazon: AmazonConfig,
    pub ebay: EbayConfig,
}

impl RetailersConfig {
    /// Environment variables:
    /// - AMAZON_ENABLED, AMAZON_ACCESS_KEY, AMAZON_SECRET_KEY,
    ///   AMAZON_PARTNER_TAG, AMAZON_ENDPOINT
    /// - EBAY_ENABLED, EBAY_OAUTH_TOKEN, EBAY_CAMPAIGN_ID, EBAY_ENDPOINT
    pub fn from_env() -> Self {
        let mut amazon = AmazonConfig {
            enabled: env_flag("AMAZON_ENABLED", true),
            access_key: env_opt("AMAZON_ACCESS_KEY"),
            secret_key: env_opt("AMAZON_SECRET_KEY"),
            partner_tag: env_opt("AMAZON_PARTNER_TAG"),
            ..Default::default()
        };
        if let Some(endpoint) = env_opt("AMAZON_ENDPOINT") {
            amazon.endpoint = endpoint;
        }

        let mut ebay = EbayConfig {
            enabled: env_flag("EBAY_ENABLED", true),
            oauth_token: env_opt("EBAY_OAUTH_TOKEN"),
            campaign_id: env_opt("EBAY_CAMPAIGN_ID"),
            ..Default::default()
        };
        if let Some(endpoint) = env_opt("EBAY_ENDPOINT") {
            ebay.endpoint = endpoint;
        }

        Self { amazon, ebay }
    }
}

/// Non-empty environment value, trimmed.
fn env_opt(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|value| parse_flag(&value, default))
        .unwrap_or(default)
}

fn parse_flag(value: &str, default: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}
