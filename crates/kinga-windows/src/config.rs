use std::time::Duration;

use jiff::tz::Offset;
use serde::{Deserialize, Serialize};

use crate::error::WindowError;

/// Current config version. Bump this when adding fields or changing shape.
const CURRENT_VERSION: u32 = 1;

pub const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(1);
pub const MAX_REFRESH_INTERVAL: Duration = Duration::from_secs(3600);

/// Clinical deadlines, tier thresholds and refresh cadence.
///
/// Missing fields fall back to the national PRC guideline values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    pub config_version: u32,
    /// Hours after the incident within which PEP may be started.
    pub pep_deadline_hours: u32,
    /// Hours after the incident within which emergency contraception works.
    pub ec_deadline_hours: u32,
    /// PEP tier becomes `urgent` after this many hours.
    pub urgent_after_hours: u32,
    /// PEP tier becomes `critical` after this many hours.
    pub critical_after_hours: u32,
    pub refresh_interval_secs: u64,
    /// Offset used to read incident wall-clock times. Default is East Africa
    /// Time (UTC+03:00), which has no daylight saving.
    pub utc_offset_minutes: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            pep_deadline_hours: 72,
            ec_deadline_hours: 120,
            urgent_after_hours: 24,
            critical_after_hours: 48,
            refresh_interval_secs: 60,
            utc_offset_minutes: 180,
        }
    }
}

impl WindowConfig {
    /// Defaults with incident times read as UTC.
    pub fn utc() -> Self {
        Self {
            utc_offset_minutes: 0,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config, rejecting versions newer than this
    /// build understands.
    pub fn from_json(contents: &str) -> Result<Self, WindowError> {
        let json: serde_json::Value = serde_json::from_str(contents)?;
        let on_disk_version = json
            .get("config_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0);
        if on_disk_version > u64::from(CURRENT_VERSION) {
            return Err(WindowError::Config(format!(
                "config_version {on_disk_version} is newer than this build supports ({CURRENT_VERSION})"
            )));
        }

        let mut config: WindowConfig = serde_json::from_value(json)?;
        config.config_version = CURRENT_VERSION;
        config.validate()?;
        tracing::debug!(?config, "window config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), WindowError> {
        if !(0 < self.urgent_after_hours
            && self.urgent_after_hours < self.critical_after_hours
            && self.critical_after_hours < self.pep_deadline_hours)
        {
            return Err(WindowError::Config(format!(
                "tier thresholds must increase: 0 < {} < {} < {}",
                self.urgent_after_hours, self.critical_after_hours, self.pep_deadline_hours
            )));
        }
        if self.ec_deadline_hours == 0 {
            return Err(WindowError::Config(
                "ec_deadline_hours must be positive".to_string(),
            ));
        }

        let interval = self.refresh_interval();
        if interval < MIN_REFRESH_INTERVAL || interval > MAX_REFRESH_INTERVAL {
            return Err(WindowError::Config(format!(
                "refresh interval {interval:?} outside [{MIN_REFRESH_INTERVAL:?}, {MAX_REFRESH_INTERVAL:?}]"
            )));
        }

        self.offset()?;
        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn offset(&self) -> Result<Offset, WindowError> {
        let seconds = self.utc_offset_minutes.checked_mul(60).ok_or_else(|| {
            WindowError::Config(format!("utc offset {} minutes", self.utc_offset_minutes))
        })?;
        Offset::from_seconds(seconds)
            .map_err(|e| WindowError::Config(format!("utc offset: {e}")))
    }
}
