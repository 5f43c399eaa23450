use crate::errors::ConfigError;
use crate::scheduler::DEFAULT_REFRESH_INTERVAL;
use crate::time_format::RecencyPolicy;
use reqwest::Url;
use std::env;
use std::time::Duration;

pub const DEFAULT_COUNTER_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub counter_url: Url,
    pub refresh_interval: Duration,
    pub recency: RecencyPolicy,
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = lookup("COUNTER_URL").unwrap_or_else(|| DEFAULT_COUNTER_URL.to_string());
        let counter_url = Url::parse(&raw_url).map_err(|err| ConfigError::InvalidUrl {
            value: raw_url.clone(),
            reason: err.to_string(),
        })?;

        let refresh_interval = lookup("REFRESH_INTERVAL_SECS")
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REFRESH_INTERVAL);

        let mut recency = RecencyPolicy::CURRENT;
        if let Some(minutes) = lookup("STALE_AFTER_MINUTES")
            .and_then(|value| value.parse::<f64>().ok())
            .filter(|minutes| minutes.is_finite())
        {
            recency.stale_after_minutes = minutes;
        }
        if let Some(hour_scale) =
            lookup("RECENCY_HOUR_SCALE").and_then(|value| value.parse::<bool>().ok())
        {
            recency.hour_scale = hour_scale;
        }

        Ok(Self {
            counter_url,
            refresh_interval,
            recency,
        })
    }
}
