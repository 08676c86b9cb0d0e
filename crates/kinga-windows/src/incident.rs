use jiff::Timestamp;
use jiff::civil::{Date, DateTime, Time};
use jiff::tz::Offset;
use kinga_core::models::moh363::Moh363Document;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::WindowConfig;
use crate::error::WindowError;
use crate::window::{TreatmentWindows, compute_windows};

/// Resolve an incident date and optional time-of-day to an instant.
///
/// `date` is `YYYY-MM-DD`, or a full `YYYY-MM-DDTHH:mm[:ss]` when `time` is
/// absent. A missing or blank `time` means midnight. Wall-clock values are
/// read at `offset`.
pub fn parse_incident(date: &str, time: Option<&str>, offset: Offset) -> Result<Timestamp, WindowError> {
    let local = parse_local(date, time)?;
    offset.to_timestamp(local).map_err(|e| invalid(date, time, e))
}

fn parse_local(date: &str, time: Option<&str>) -> Result<DateTime, WindowError> {
    let date_str = date.trim();
    let time_str = time.map(str::trim).filter(|t| !t.is_empty());

    if date_str.is_empty() {
        return Err(invalid(date, time, "incident date is required"));
    }

    if date_str.contains('T') {
        if time_str.is_some() {
            return Err(invalid(date, time, "time given twice"));
        }
        return date_str
            .parse::<DateTime>()
            .map_err(|e| invalid(date, time, e));
    }

    let day = date_str
        .parse::<Date>()
        .map_err(|e| invalid(date, time, e))?;
    let time_of_day = match time_str {
        None => Time::midnight(),
        Some(t) => Time::strptime("%H:%M", t)
            .or_else(|_| t.parse::<Time>())
            .map_err(|e| invalid(date, time, e))?,
    };
    Ok(day.to_datetime(time_of_day))
}

fn invalid(date: &str, time: Option<&str>, reason: impl std::fmt::Display) -> WindowError {
    let input = match time {
        Some(t) if !t.trim().is_empty() => format!("{date} {t}"),
        _ => date.to_string(),
    };
    WindowError::InvalidTimeInput {
        input,
        reason: reason.to_string(),
    }
}

/// The four values the calculator reads from a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WindowInputs {
    pub incident_date: String,
    pub incident_time: String,
    pub pep_administered: bool,
    pub ec_administered: bool,
}

impl WindowInputs {
    pub fn incident(&self, config: &WindowConfig) -> Result<Timestamp, WindowError> {
        parse_incident(
            &self.incident_date,
            Some(self.incident_time.as_str()),
            config.offset()?,
        )
    }

    pub fn compute(&self, now: Timestamp, config: &WindowConfig) -> Result<TreatmentWindows, WindowError> {
        compute_windows(
            self.incident(config)?,
            now,
            self.pep_administered,
            self.ec_administered,
            config,
        )
    }
}

impl From<&Moh363Document> for WindowInputs {
    fn from(doc: &Moh363Document) -> Self {
        let incident = &doc.part_a.incident;
        let treatment = &doc.part_a.treatment;
        Self {
            incident_date: incident.incident_date.clone(),
            incident_time: incident.incident_time.clone(),
            pep_administered: treatment.pep_administered.unwrap_or(false),
            ec_administered: treatment.ec_administered.unwrap_or(false),
        }
    }
}
