use std::{env, time::Duration};

use anyhow::{Context as _, bail};
use rusty_chooser::MAX_PAGE_SIZE;

const DEFAULT_CHOOSER_TIMEOUT_SECS: u64 = 120;

/// Settings read from the process environment (and `.env`).
#[derive(Clone, Debug)]
pub struct BotConfig {
    pub token: String,
    /// How long a chooser page waits for a click before giving up.
    pub chooser_timeout: Duration,
    /// Options per chooser page, clamped to the select-menu limit.
    pub chooser_page_size: usize,
}

impl BotConfig {
    /// Load `.env` if present, then read the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let token = lookup("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .context("DISCORD_TOKEN is not set")?;

        let chooser_timeout_secs = match lookup("CHOOSER_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("CHOOSER_TIMEOUT_SECS is not a number: {raw}"))?;
                if secs == 0 {
                    bail!("CHOOSER_TIMEOUT_SECS must be at least 1");
                }
                secs
            }
            None => DEFAULT_CHOOSER_TIMEOUT_SECS,
        };

        let chooser_page_size = match lookup("CHOOSER_PAGE_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("CHOOSER_PAGE_SIZE is not a number: {raw}"))?
                .clamp(1, MAX_PAGE_SIZE),
            None => MAX_PAGE_SIZE,
        };

        Ok(Self {
            token,
            chooser_timeout: Duration::from_secs(chooser_timeout_secs),
            chooser_page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(pairs: &[(&str, &str)]) -> anyhow::Result<BotConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        BotConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_token_is_set() {
        let config = config(&[("DISCORD_TOKEN", "abc")]).expect("valid config");

        assert_eq!(config.token, "abc");
        assert_eq!(config.chooser_timeout, Duration::from_secs(120));
        assert_eq!(config.chooser_page_size, 25);
    }

    #[test]
    fn missing_token_is_an_error() {
        assert!(config(&[]).is_err());
        assert!(config(&[("DISCORD_TOKEN", "  ")]).is_err());
    }

    #[test]
    fn page_size_is_clamped() {
        let big = config(&[("DISCORD_TOKEN", "t"), ("CHOOSER_PAGE_SIZE", "80")])
            .expect("valid config");
        let zero = config(&[("DISCORD_TOKEN", "t"), ("CHOOSER_PAGE_SIZE", "0")])
            .expect("valid config");

        assert_eq!(big.chooser_page_size, 25);
        assert_eq!(zero.chooser_page_size, 1);
    }

    #[test]
    fn bad_timeout_is_rejected() {
        assert!(config(&[("DISCORD_TOKEN", "t"), ("CHOOSER_TIMEOUT_SECS", "soon")]).is_err());
        assert!(config(&[("DISCORD_TOKEN", "t"), ("CHOOSER_TIMEOUT_SECS", "0")]).is_err());

        let custom = config(&[("DISCORD_TOKEN", "t"), ("CHOOSER_TIMEOUT_SECS", "30")])
            .expect("valid config");
        assert_eq!(custom.chooser_timeout, Duration::from_secs(30));
    }
}
