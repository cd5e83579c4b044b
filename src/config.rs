use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::collections::HashMap;
use std::env;

use crate::types::LotteryKind;

/// Runtime configuration, loaded once at startup and passed into the
/// dispatcher. Source URLs live in environment variables named after the
/// uppercased lottery identifiers.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    source_urls: HashMap<LotteryKind, String>,
}

impl Config {
    /// Load configuration from environment variables, reading a `.env` file
    /// first if one is present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = get("PORT")
            .context("PORT must be set")?
            .parse()
            .context("PORT must be a valid port number")?;

        // A kind without a configured URL is not a startup failure; it is
        // reported per request as MissingSourceUrl.
        let mut source_urls = HashMap::new();
        for kind in LotteryKind::ALL {
            if let Some(url) = get(kind.as_str()) {
                source_urls.insert(kind, url);
            }
        }

        Ok(Self { port, source_urls })
    }

    pub fn source_url(&self, kind: LotteryKind) -> Option<&str> {
        self.source_urls.get(&kind).map(String::as_str)
    }

    #[cfg(test)]
    pub fn for_tests(source_urls: &[(LotteryKind, &str)]) -> Self {
        Self {
            port: 0,
            source_urls: source_urls
                .iter()
                .map(|(kind, url)| (*kind, url.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn missing_port_is_fatal() {
        assert!(Config::from_lookup(vars(&[])).is_err());
    }

    #[test]
    fn malformed_port_is_fatal() {
        assert!(Config::from_lookup(vars(&[("PORT", "lottery")])).is_err());
    }

    #[test]
    fn missing_source_urls_are_not_fatal() {
        let config = Config::from_lookup(vars(&[("PORT", "8080")])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.source_url(LotteryKind::Keno), None);
    }

    #[test]
    fn source_urls_are_keyed_by_uppercased_identifier() {
        let config = Config::from_lookup(vars(&[
            ("PORT", "8080"),
            ("KENO", "http://example.com/keno"),
            ("MAX3D", "http://example.com/max3d"),
        ]))
        .unwrap();

        assert_eq!(
            config.source_url(LotteryKind::Keno),
            Some("http://example.com/keno")
        );
        assert_eq!(
            config.source_url(LotteryKind::Max3D),
            Some("http://example.com/max3d")
        );
        assert_eq!(config.source_url(LotteryKind::Mega645), None);
    }
}
