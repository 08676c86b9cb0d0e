use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::WindowConfig;
use crate::error::WindowError;

/// Elapsed-time urgency of the PEP deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum UrgencyTier {
    /// Up to 24 h elapsed.
    Warning,
    /// More than 24 h, up to 48 h.
    Urgent,
    /// More than 48 h, up to 72 h.
    Critical,
    /// Past the deadline.
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum DeadlineKind {
    /// HIV post-exposure prophylaxis.
    Pep,
    /// Emergency contraception.
    EmergencyContraception,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DeadlineWindow {
    pub kind: DeadlineKind,
    pub deadline_hours: u32,
    /// Never negative.
    pub hours_remaining: f64,
    pub deadline: Timestamp,
    /// Inclusive: true at the deadline instant itself.
    pub within_window: bool,
    pub administered: bool,
}

impl DeadlineWindow {
    /// Whether a consumer should still prompt for this treatment.
    pub fn alert_active(&self) -> bool {
        self.within_window && !self.administered
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TreatmentWindows {
    pub incident: Timestamp,
    pub computed_at: Timestamp,
    /// Never negative.
    pub hours_elapsed: f64,
    pub pep: DeadlineWindow,
    pub ec: DeadlineWindow,
    /// Reflects elapsed time only; the administered flags never change it.
    pub pep_urgency: UrgencyTier,
}

impl TreatmentWindows {
    pub fn pep_alert_active(&self) -> bool {
        self.pep.alert_active()
    }

    pub fn ec_alert_active(&self) -> bool {
        self.ec.alert_active()
    }
}

/// Classify elapsed hours against the PEP thresholds. Boundaries are
/// inclusive on the lower tier.
pub fn urgency_tier(hours_elapsed: f64, config: &WindowConfig) -> UrgencyTier {
    if hours_elapsed <= f64::from(config.urgent_after_hours) {
        UrgencyTier::Warning
    } else if hours_elapsed <= f64::from(config.critical_after_hours) {
        UrgencyTier::Urgent
    } else if hours_elapsed <= f64::from(config.pep_deadline_hours) {
        UrgencyTier::Critical
    } else {
        UrgencyTier::Expired
    }
}

/// Compute both treatment deadlines for an incident as seen at `now`.
///
/// An incident slightly after `now` (a rounded-up minute, a lagging device
/// clock) counts as zero hours elapsed.
pub fn compute_windows(
    incident: Timestamp,
    now: Timestamp,
    pep_administered: bool,
    ec_administered: bool,
    config: &WindowConfig,
) -> Result<TreatmentWindows, WindowError> {
    let hours_elapsed = (now.duration_since(incident).as_secs_f64() / 3600.0).max(0.0);
    let pep = deadline(
        DeadlineKind::Pep,
        config.pep_deadline_hours,
        incident,
        hours_elapsed,
        pep_administered,
    )?;
    let ec = deadline(
        DeadlineKind::EmergencyContraception,
        config.ec_deadline_hours,
        incident,
        hours_elapsed,
        ec_administered,
    )?;

    Ok(TreatmentWindows {
        incident,
        computed_at: now,
        hours_elapsed,
        pep,
        ec,
        pep_urgency: urgency_tier(hours_elapsed, config),
    })
}

fn deadline(
    kind: DeadlineKind,
    deadline_hours: u32,
    incident: Timestamp,
    hours_elapsed: f64,
    administered: bool,
) -> Result<DeadlineWindow, WindowError> {
    let deadline = incident
        .checked_add(SignedDuration::from_hours(i64::from(deadline_hours)))
        .map_err(|e| WindowError::InvalidTimeInput {
            input: incident.to_string(),
            reason: e.to_string(),
        })?;
    let limit = f64::from(deadline_hours);

    Ok(DeadlineWindow {
        kind,
        deadline_hours,
        hours_remaining: (limit - hours_elapsed).max(0.0),
        deadline,
        within_window: hours_elapsed <= limit,
        administered,
    })
}
