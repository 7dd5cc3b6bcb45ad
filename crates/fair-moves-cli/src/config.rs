//! Environment configuration.

/// Runtime settings read from the environment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// `tracing` filter directives (`RUST_LOG`)
    pub log_filter: String,
    /// Re-check the revealed key against the published HMAC (`FAIR_MOVES_SELF_VERIFY`)
    pub self_verify: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            self_verify: true,
        }
    }
}

impl CliConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_filter: lookup("RUST_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_filter),
            self_verify: lookup("FAIR_MOVES_SELF_VERIFY")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.self_verify),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
