use anyhow::{Context, Result};
use std::env;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,

    // Backend API
    pub api_base_url: Url,
    pub api_timeout_seconds: u64,

    // Listing
    pub list_page_size: usize,

    // Session token available at boot (login happens elsewhere)
    pub api_token: Option<String>,
}

impl Settings {
    /// Default number of rows per listing page.
    pub const DEFAULT_PAGE_SIZE: usize = 5;

    pub fn from_env() -> Result<Self> {
        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));

        let api_base_url = env::var("API_BASE_URL").context("API_BASE_URL must be set")?;
        let api_base_url = parse_base_url(&api_base_url)?;
        let api_timeout_seconds = env::var("API_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        let list_page_size = env::var("LIST_PAGE_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(Self::DEFAULT_PAGE_SIZE);

        let api_token = env::var("API_TOKEN")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Settings {
            env,
            api_base_url,
            api_timeout_seconds,
            list_page_size,
            api_token,
        })
    }

    /// Settings for a given base URL with every other value defaulted.
    pub fn for_base_url(base_url: &str) -> Result<Self> {
        Ok(Settings {
            env: Environment::Dev,
            api_base_url: parse_base_url(base_url)?,
            api_timeout_seconds: 30,
            list_page_size: Self::DEFAULT_PAGE_SIZE,
            api_token: None,
        })
    }
}

/// Parses the base URL, forcing a trailing slash so relative endpoint paths
/// join under it instead of replacing its last segment.
fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    Url::parse(&normalized).with_context(|| format!("API_BASE_URL is not a valid URL: {}", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parsing_defaults_to_dev() {
        assert_eq!(Environment::from_str("production"), Environment::Prod);
        assert_eq!(Environment::from_str("STAGING"), Environment::Staging);
        assert_eq!(Environment::from_str("anything"), Environment::Dev);
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let settings = Settings::for_base_url("https://api.example.com/v1").unwrap();
        assert_eq!(settings.api_base_url.as_str(), "https://api.example.com/v1/");
        assert_eq!(settings.list_page_size, 5);
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(Settings::for_base_url("not a url").is_err());
    }
}
