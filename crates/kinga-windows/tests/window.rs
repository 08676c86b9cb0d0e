use jiff::{SignedDuration, Timestamp};
use jiff::tz::Offset;
use kinga_windows::window::urgency_tier;
use kinga_windows::{
    DeadlineKind, UrgencyTier, WindowConfig, compute_windows, parse_incident,
};

fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

fn plus(t: Timestamp, secs: i64) -> Timestamp {
    t.checked_add(SignedDuration::from_secs(secs)).unwrap()
}

fn incident() -> Timestamp {
    parse_incident("2024-01-01", None, WindowConfig::utc().offset().unwrap()).unwrap()
}

#[test]
fn midnight_is_assumed_without_a_time() {
    assert_eq!(incident(), ts("2024-01-01T00:00:00Z"));
}

#[test]
fn tier_is_warning_at_24h_and_urgent_one_second_later() {
    let config = WindowConfig::utc();
    let at_24h = ts("2024-01-02T00:00:00Z");

    let windows = compute_windows(incident(), at_24h, false, false, &config).unwrap();
    assert_eq!(windows.hours_elapsed, 24.0);
    assert_eq!(windows.pep_urgency, UrgencyTier::Warning);

    let later = compute_windows(incident(), plus(at_24h, 1), false, false, &config).unwrap();
    assert_eq!(later.pep_urgency, UrgencyTier::Urgent);
}

#[test]
fn pep_window_closes_one_second_after_72h() {
    let config = WindowConfig::utc();
    let at_72h = ts("2024-01-04T00:00:00Z");

    let windows = compute_windows(incident(), at_72h, false, false, &config).unwrap();
    assert!(windows.pep.within_window);
    assert_eq!(windows.pep.hours_remaining, 0.0);
    assert_eq!(windows.pep.deadline, at_72h);
    assert_eq!(windows.pep_urgency, UrgencyTier::Critical);

    let later = compute_windows(incident(), plus(at_72h, 1), false, false, &config).unwrap();
    assert!(!later.pep.within_window);
    assert_eq!(later.pep.hours_remaining, 0.0);
    assert_eq!(later.pep_urgency, UrgencyTier::Expired);
}

#[test]
fn ec_window_outlasts_pep() {
    let config = WindowConfig::utc();
    let at_80h = plus(incident(), 80 * 3600);

    let windows = compute_windows(incident(), at_80h, false, false, &config).unwrap();
    assert_eq!(windows.hours_elapsed, 80.0);
    assert!(!windows.pep.within_window);
    assert!(windows.ec.within_window);
    assert_eq!(windows.ec.kind, DeadlineKind::EmergencyContraception);
    assert_eq!(windows.ec.hours_remaining, 40.0);
    assert_eq!(windows.ec.deadline, ts("2024-01-06T00:00:00Z"));
}

#[test]
fn administered_flags_do_not_change_the_tier() {
    let config = WindowConfig::utc();
    let at_30h = plus(incident(), 30 * 3600);

    let untreated = compute_windows(incident(), at_30h, false, false, &config).unwrap();
    let treated = compute_windows(incident(), at_30h, true, true, &config).unwrap();

    assert_eq!(untreated.pep_urgency, UrgencyTier::Urgent);
    assert_eq!(treated.pep_urgency, UrgencyTier::Urgent);
    assert_eq!(untreated.pep.hours_remaining, treated.pep.hours_remaining);

    assert!(untreated.pep_alert_active());
    assert!(!treated.pep_alert_active());
    assert!(untreated.ec_alert_active());
    assert!(!treated.ec_alert_active());
}

#[test]
fn tiers_cover_every_band() {
    let config = WindowConfig::default();
    assert_eq!(urgency_tier(0.0, &config), UrgencyTier::Warning);
    assert_eq!(urgency_tier(24.0, &config), UrgencyTier::Warning);
    assert_eq!(urgency_tier(24.5, &config), UrgencyTier::Urgent);
    assert_eq!(urgency_tier(48.0, &config), UrgencyTier::Urgent);
    assert_eq!(urgency_tier(48.01, &config), UrgencyTier::Critical);
    assert_eq!(urgency_tier(72.0, &config), UrgencyTier::Critical);
    assert_eq!(urgency_tier(72.01, &config), UrgencyTier::Expired);
}

#[test]
fn incident_just_after_now_is_a_fresh_warning() {
    let config = WindowConfig::utc();
    let incident = parse_incident("2024-01-01", Some("12:05"), Offset::UTC).unwrap();
    let now = ts("2024-01-01T12:04:30Z");

    let windows = compute_windows(incident, now, false, false, &config).unwrap();
    assert_eq!(windows.hours_elapsed, 0.0);
    assert_eq!(windows.pep_urgency, UrgencyTier::Warning);
    assert!(windows.pep.within_window);
    assert!(windows.ec.within_window);
    assert_eq!(windows.pep.hours_remaining, 72.0);
    assert_eq!(windows.pep.deadline, ts("2024-01-04T12:05:00Z"));
}

#[test]
fn results_serialize_in_camel_case() {
    let config = WindowConfig::utc();
    let windows = compute_windows(incident(), ts("2024-01-01T06:00:00Z"), false, false, &config)
        .unwrap();
    let json = serde_json::to_value(&windows).unwrap();
    assert_eq!(json["pepUrgency"], "warning");
    assert_eq!(json["pep"]["withinWindow"], true);
    assert_eq!(json["ec"]["kind"], "emergencyContraception");
}
