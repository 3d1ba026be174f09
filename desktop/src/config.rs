use quiz_core::SourceConfig;
use std::env;
use std::time::Duration;

const DEFAULT_FEEDBACK_MS: u64 = 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub source: SourceConfig,
    /// How long the card stays green/red after an answer.
    pub feedback_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            feedback_delay: Duration::from_millis(DEFAULT_FEEDBACK_MS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut config = Self {
            source: SourceConfig::from_env(),
            ..Self::default()
        };

        if let Ok(raw) = env::var("QUIZZLER_FEEDBACK_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.feedback_delay = Duration::from_millis(ms),
                Err(_) => log::warn!("ignoring invalid QUIZZLER_FEEDBACK_MS={raw:?}"),
            }
        }

        config
    }
}
