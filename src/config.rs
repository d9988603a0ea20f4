use std::env;
use std::time::Duration;
use url::Url;

/// The monitored account. Transfers received by this account render as
/// credits; everything else is a debit.
pub const DEFAULT_ACCOUNT_NAME: &str = "TechCorp Solutions";

/// Default transactions endpoint served by the monitoring backend.
pub const DEFAULT_FEED_URL: &str = "http://127.0.0.1:8000/api/transactions/";

/// Sign-out endpoint opened in the system browser on logout.
pub const DEFAULT_LOGOUT_URL: &str = "http://127.0.0.1:8000/logout/";

/// Default refresh cadence for the transaction monitor, in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Accepted range for the user-configurable refresh cadence.
pub const POLL_INTERVAL_RANGE_SECS: (u64, u64) = (1, 120);

/// Runtime configuration with environment overrides. URL-shaped values are
/// validated at load time; an invalid override falls back to the default
/// with a warning rather than aborting startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub feed_url: Url,
    pub logout_url: Url,
    pub account_name: String,
    pub poll_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: parse_known_url(DEFAULT_FEED_URL),
            logout_url: parse_known_url(DEFAULT_LOGOUT_URL),
            account_name: DEFAULT_ACCOUNT_NAME.to_string(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
        }
    }
}

// Only ever called on the compile-time constants above.
fn parse_known_url(raw: &str) -> Url {
    Url::parse(raw).expect("built-in URL is valid")
}

impl Config {
    /// Build a config from the environment, falling back to defaults for
    /// anything unset or unparseable.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = env::var("ORBISDASH_FEED_URL") {
            match Url::parse(&raw) {
                Ok(url) => config.feed_url = url,
                Err(e) => tracing::warn!("ignoring invalid ORBISDASH_FEED_URL {:?}: {}", raw, e),
            }
        }
        if let Ok(raw) = env::var("ORBISDASH_LOGOUT_URL") {
            match Url::parse(&raw) {
                Ok(url) => config.logout_url = url,
                Err(e) => tracing::warn!("ignoring invalid ORBISDASH_LOGOUT_URL {:?}: {}", raw, e),
            }
        }
        if let Ok(name) = env::var("ORBISDASH_ACCOUNT") {
            if !name.trim().is_empty() {
                config.account_name = name.trim().to_string();
            }
        }
        if let Ok(raw) = env::var("ORBISDASH_POLL_INTERVAL_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) => config.poll_interval_secs = clamp_poll_interval(secs),
                Err(e) => {
                    tracing::warn!("ignoring invalid ORBISDASH_POLL_INTERVAL_SECS {:?}: {}", raw, e)
                }
            }
        }

        config
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

/// Clamp a requested cadence into the supported range.
pub fn clamp_poll_interval(secs: u64) -> u64 {
    secs.clamp(POLL_INTERVAL_RANGE_SECS.0, POLL_INTERVAL_RANGE_SECS.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = Config::default();
        assert_eq!(config.account_name, "TechCorp Solutions");
        assert_eq!(config.feed_url.as_str(), DEFAULT_FEED_URL);
        assert_eq!(config.logout_url.as_str(), DEFAULT_LOGOUT_URL);
        assert_eq!(config.poll_interval_secs, 5);
    }

    #[test]
    fn test_poll_interval_duration() {
        let config = Config::default();
        assert_eq!(config.poll_interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_clamp_poll_interval_bounds() {
        assert_eq!(clamp_poll_interval(0), 1);
        assert_eq!(clamp_poll_interval(5), 5);
        assert_eq!(clamp_poll_interval(600), 120);
    }
}
