use std::time::Duration;

use crate::store::DEFAULT_BASE_URL;

/// How long a successful save stays in `saving` before returning to `idle`
pub const DEFAULT_NOTICE_DELAY: Duration = Duration::from_millis(1000);

/// Store configuration injected into a draft manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Base URL of the JSON document service
    pub base_url: String,
    /// Display delay before a successful save is reported
    pub notice_delay: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            notice_delay: DEFAULT_NOTICE_DELAY,
        }
    }
}

impl SyncConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_notice_delay(mut self, delay: Duration) -> Self {
        self.notice_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SyncConfig::new();
        assert_eq!(config.base_url, "https://jsonblob.com/api/jsonBlob");
        assert_eq!(config.notice_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_builder() {
        let config = SyncConfig::new()
            .with_base_url("http://localhost:3000/api/jsonBlob")
            .with_notice_delay(Duration::ZERO);
        assert_eq!(config.base_url, "http://localhost:3000/api/jsonBlob");
        assert_eq!(config.notice_delay, Duration::ZERO);
    }
}
