use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::config::{merge_raw_env, ConfigError};

pub const DEFAULT_BROWSER: &str = "firefox";
pub const DEFAULT_GRACE_PERIOD_MS: u64 = 2000;

/// Previewer settings: built-in defaults, overridden by `MDP_BROWSER` and
/// `MDP_GRACE_PERIOD_MS`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MdpConfig {
    /// Browser launched when `-b` is not given.
    pub browser: String,
    /// How long the preview file outlives the browser launch.
    pub grace_period_ms: u64,
}

impl Default for MdpConfig {
    fn default() -> Self {
        Self {
            browser: DEFAULT_BROWSER.to_string(),
            grace_period_ms: DEFAULT_GRACE_PERIOD_MS,
        }
    }
}

impl MdpConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let mut config: Self = Self::figment().extract()?;
        if config.browser.trim().is_empty() {
            config.browser = DEFAULT_BROWSER.to_string();
        }
        Ok(config)
    }

    pub fn figment() -> Figment {
        let figment = Figment::from(Serialized::defaults(Self::default()))
            .merge(Env::prefixed("MDP_").only(&["grace_period_ms"]));
        merge_raw_env(figment, "MDP_BROWSER", "browser")
    }

    pub fn grace_period(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.grace_period_ms)
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_to_firefox_and_two_seconds() {
        Jail::expect_with(|_jail| {
            let config = MdpConfig::load().expect("config loads");
            assert_eq!(config, MdpConfig::default());
            assert_eq!(config.grace_period(), std::time::Duration::from_secs(2));
            Ok(())
        });
    }

    #[test]
    fn env_overrides_browser_and_grace_period() {
        Jail::expect_with(|jail| {
            jail.set_env("MDP_BROWSER", "chromium");
            jail.set_env("MDP_GRACE_PERIOD_MS", "250");
            let config = MdpConfig::load().expect("config loads");
            assert_eq!(config.browser, "chromium");
            assert_eq!(config.grace_period_ms, 250);
            Ok(())
        });
    }

    #[test]
    fn numeric_browser_name_is_kept_as_text() {
        Jail::expect_with(|jail| {
            jail.set_env("MDP_BROWSER", "123");
            let config = MdpConfig::load().expect("config loads");
            assert_eq!(config.browser, "123");
            Ok(())
        });
    }

    #[test]
    fn invalid_grace_period_is_an_error() {
        Jail::expect_with(|jail| {
            jail.set_env("MDP_GRACE_PERIOD_MS", "soon");
            assert!(MdpConfig::load().is_err());
            Ok(())
        });
    }
}
