//! Configuration Module
//!
//! Loads server and cache configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Server configuration parameters.
///
/// Every value has a default; unset or unparsable variables fall back to it.
/// Out-of-range cache settings are clamped later by the cache itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Lifetime in milliseconds for entries set without an explicit TTL
    pub default_ttl_ms: u64,
    /// Maximum number of resident entries
    pub max_entries: usize,
    /// Expiry sweep period in milliseconds, `0` disables the sweep
    pub sweep_interval_ms: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_DEFAULT_TTL_MS` - Default entry TTL (default: 60000)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 500)
    /// - `CACHE_SWEEP_INTERVAL_MS` - Sweep period, 0 = off (default: 30000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            default_ttl_ms: parse_or(&lookup, "CACHE_DEFAULT_TTL_MS", defaults.default_ttl_ms),
            max_entries: parse_or(&lookup, "CACHE_MAX_ENTRIES", defaults.max_entries),
            sweep_interval_ms: parse_or(
                &lookup,
                "CACHE_SWEEP_INTERVAL_MS",
                defaults.sweep_interval_ms,
            ),
            server_port: parse_or(&lookup, "SERVER_PORT", defaults.server_port),
        }
    }

    /// Sweep period, or `None` when the sweep is disabled.
    pub fn sweep_interval(&self) -> Option<Duration> {
        (self.sweep_interval_ms > 0).then(|| Duration::from_millis(self.sweep_interval_ms))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl_ms: 60_000,
            max_entries: 500,
            sweep_interval_ms: 30_000,
            server_port: 3000,
        }
    }
}

fn parse_or<T, F>(lookup: &F, name: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.default_ttl_ms, 60_000);
        assert_eq!(config.max_entries, 500);
        assert_eq!(config.sweep_interval_ms, 30_000);
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_config_empty_lookup_uses_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_reads_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("CACHE_DEFAULT_TTL_MS", "5000"),
            ("CACHE_MAX_ENTRIES", " 3 "),
            ("CACHE_SWEEP_INTERVAL_MS", "0"),
            ("SERVER_PORT", "8080"),
        ]));

        assert_eq!(config.default_ttl_ms, 5_000);
        assert_eq!(config.max_entries, 3);
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.sweep_interval(), None);
    }

    #[test]
    fn test_config_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("CACHE_DEFAULT_TTL_MS", "-5"),
            ("CACHE_MAX_ENTRIES", "lots"),
            ("SERVER_PORT", "70000"),
        ]));

        assert_eq!(config.default_ttl_ms, 60_000);
        assert_eq!(config.max_entries, 500);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.sweep_interval(), Some(Duration::from_millis(30_000)));
    }
}
