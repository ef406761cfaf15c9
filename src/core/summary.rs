//! The overtime/summary aggregation engine.
//!
//! Folds the entry collection into per-day totals and the derived
//! summary metrics. Pure and synchronous: the reference date for the
//! "current month" window is injected by the caller, never read from
//! the system clock here.

use crate::core::time_calc::elapsed_hours;
use crate::models::entry::Entry;
use crate::models::kind::Kind;
use crate::models::summary::SummaryMetrics;
use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};

/// Assumed working hours per regular day. Regular hours are netted
/// against this baseline; on-call deployment hours never are.
pub const WORKDAY_HOURS: f64 = 8.0;

/// Compute the summary metrics for a whole entry collection.
///
/// `base_overtime` is the user-entered correction carried over from
/// before the tool was in use; it is added once to the grand total.
/// `today` determines the current-month window (`YYYY-MM` match).
pub fn compute_summary(entries: &[Entry], base_overtime: f64, today: NaiveDate) -> SummaryMetrics {
    // ------------------------------------------------
    // Precedence pass: vacation/sick days are full days
    // off, whatever else was logged on the same date.
    // ------------------------------------------------
    let mut vacation_dates: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut sick_dates: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut on_call_dates: BTreeSet<NaiveDate> = BTreeSet::new();

    for entry in entries {
        match entry.kind() {
            Kind::Vacation => {
                vacation_dates.insert(entry.date);
            }
            Kind::Sick => {
                sick_dates.insert(entry.date);
            }
            // Day counts are independent of the hour exclusion below.
            Kind::OnCall => {
                on_call_dates.insert(entry.date);
            }
            _ => {}
        }
    }

    let excluded = |d: &NaiveDate| vacation_dates.contains(d) || sick_dates.contains(d);

    // ------------------------------------------------
    // Hour accumulation pass
    // ------------------------------------------------
    let mut regular_by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    let mut on_call_by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for entry in entries {
        if excluded(&entry.date) {
            continue;
        }

        match entry.kind() {
            Kind::Regular => {
                let hours = elapsed_hours(entry.start, entry.end);
                // invalid/zero spans contribute nothing, not a 0-hour day
                if hours > 0.0 {
                    *regular_by_day.entry(entry.date).or_insert(0.0) += hours;
                }
            }
            Kind::OnCall => {
                // the on-call entry itself carries no base hours
                for dep in &entry.deployments {
                    let hours = elapsed_hours(dep.start, dep.end);
                    if hours > 0.0 {
                        *on_call_by_day.entry(entry.date).or_insert(0.0) += hours;
                    }
                }
            }
            // Pause occupies a slot for display only; Vacation/Sick are
            // already excluded by their own dates.
            Kind::Pause | Kind::Vacation | Kind::Sick => {}
        }
    }

    // ------------------------------------------------
    // Overtime derivation
    // ------------------------------------------------
    let in_current_month =
        |d: &NaiveDate| d.year() == today.year() && d.month() == today.month();

    let mut total_overtime = 0.0;
    let mut current_month_overtime = 0.0;
    let mut total_work_hours = 0.0;

    for (date, hours) in &regular_by_day {
        // baseline is per day, not per entry
        let overtime = hours - WORKDAY_HOURS;
        total_overtime += overtime;
        if in_current_month(date) {
            current_month_overtime += overtime;
        }
        total_work_hours += hours;
    }

    for (date, hours) in &on_call_by_day {
        // deployments are pure overtime, never netted against the baseline
        total_overtime += hours;
        if in_current_month(date) {
            current_month_overtime += hours;
        }
        total_work_hours += hours;
    }

    total_overtime += base_overtime;

    SummaryMetrics {
        total_overtime,
        current_month_overtime,
        total_work_hours,
        vacation_days: vacation_dates.len(),
        sick_days: sick_dates.len(),
        on_call_days: on_call_dates.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::deployment::Deployment;
    use chrono::NaiveTime;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn time(s: &str) -> Option<NaiveTime> {
        Some(NaiveTime::parse_from_str(s, "%H:%M").unwrap())
    }

    fn regular(d: &str, start: &str, end: &str) -> Entry {
        let mut e = Entry::new(date(d), "Hauptsitz");
        e.start = time(start);
        e.end = time(end);
        e
    }

    fn special(d: &str, location: &str) -> Entry {
        Entry::new(date(d), location)
    }

    fn on_call(d: &str, deployments: Vec<Deployment>) -> Entry {
        let mut e = Entry::new(date(d), "Bereitschaft");
        e.deployments = deployments;
        e
    }

    const TODAY: &str = "2025-03-20";

    #[test]
    fn half_hour_over_baseline() {
        let entries = vec![regular("2025-03-10", "09:00", "17:30")];
        let s = compute_summary(&entries, 0.0, date(TODAY));
        assert_eq!(s.total_work_hours, 8.5);
        assert_eq!(s.total_overtime, 0.5);
        assert_eq!(s.current_month_overtime, 0.5);
    }

    #[test]
    fn short_day_yields_negative_overtime() {
        let entries = vec![regular("2025-03-10", "09:00", "15:00")];
        let s = compute_summary(&entries, 0.0, date(TODAY));
        assert_eq!(s.total_overtime, -2.0);
    }

    #[test]
    fn baseline_is_per_day_not_per_entry() {
        // two entries on the same date sum before the -8 is applied
        let entries = vec![
            regular("2025-03-10", "08:00", "12:00"),
            regular("2025-03-10", "13:00", "18:00"),
        ];
        let s = compute_summary(&entries, 0.0, date(TODAY));
        assert_eq!(s.total_work_hours, 9.0);
        assert_eq!(s.total_overtime, 1.0);
    }

    #[test]
    fn vacation_precedence_zeroes_co_dated_hours() {
        let entries = vec![
            special("2025-03-10", "Urlaub"),
            regular("2025-03-10", "09:00", "17:00"),
        ];
        let s = compute_summary(&entries, 0.0, date(TODAY));
        assert_eq!(s.vacation_days, 1);
        assert_eq!(s.total_work_hours, 0.0);
        assert_eq!(s.total_overtime, 0.0);
        assert_eq!(s.current_month_overtime, 0.0);
    }

    #[test]
    fn sick_precedence_excludes_on_call_deployments() {
        let entries = vec![
            special("2025-03-10", "Krank"),
            on_call(
                "2025-03-10",
                vec![Deployment::new("Leitstelle", time("20:00"), time("22:00"))],
            ),
        ];
        let s = compute_summary(&entries, 0.0, date(TODAY));
        assert_eq!(s.sick_days, 1);
        // hours are excluded, the on-call day count is not
        assert_eq!(s.on_call_days, 1);
        assert_eq!(s.total_work_hours, 0.0);
        assert_eq!(s.total_overtime, 0.0);
    }

    #[test]
    fn vacation_and_sick_day_counts_are_independent() {
        let entries = vec![
            special("2025-03-10", "Urlaub"),
            special("2025-03-10", "Krank"),
        ];
        let s = compute_summary(&entries, 0.0, date(TODAY));
        assert_eq!(s.vacation_days, 1);
        assert_eq!(s.sick_days, 1);
    }

    #[test]
    fn deployments_are_pure_overtime() {
        let entries = vec![on_call(
            "2025-03-10",
            vec![
                Deployment::new("Leitstelle", time("22:00"), time("23:00")),
                // end <= start under same-day arithmetic: contributes 0
                Deployment::new("Leitstelle", time("23:00"), time("02:00")),
            ],
        )];
        let s = compute_summary(&entries, 0.0, date(TODAY));
        assert_eq!(s.on_call_days, 1);
        assert_eq!(s.total_work_hours, 1.0);
        assert_eq!(s.total_overtime, 1.0);
    }

    #[test]
    fn pause_contributes_nothing() {
        let entries = vec![
            regular("2025-03-10", "09:00", "17:00"),
            special("2025-03-10", "Pause"),
        ];
        let s = compute_summary(&entries, 0.0, date(TODAY));
        assert_eq!(s.total_work_hours, 8.0);
        assert_eq!(s.total_overtime, 0.0);
    }

    #[test]
    fn base_correction_applied_once_to_grand_total() {
        let entries = vec![regular("2025-03-10", "09:00", "18:00")];
        let s = compute_summary(&entries, -3.25, date(TODAY));
        assert_eq!(s.total_overtime, 1.0 - 3.25);
        // not prorated into the month figure
        assert_eq!(s.current_month_overtime, 1.0);
    }

    #[test]
    fn current_month_window_is_year_and_month() {
        let entries = vec![
            regular("2025-03-10", "09:00", "18:00"), // +1.0, current month
            regular("2025-02-10", "09:00", "19:00"), // +2.0, previous month
            regular("2024-03-10", "09:00", "18:00"), // +1.0, same month last year
        ];
        let s = compute_summary(&entries, 0.0, date(TODAY));
        assert_eq!(s.total_overtime, 4.0);
        assert_eq!(s.current_month_overtime, 1.0);
    }

    #[test]
    fn totals_identity_holds() {
        let entries = vec![
            regular("2025-03-03", "09:00", "17:30"), // +0.5
            regular("2025-03-04", "09:00", "16:00"), // -1.0
            on_call(
                "2025-03-05",
                vec![Deployment::new("Leitstelle", time("20:00"), time("21:30"))],
            ), // +1.5
            special("2025-03-06", "Urlaub"),
        ];
        let s = compute_summary(&entries, 2.0, date(TODAY));
        assert_eq!(s.total_overtime, 0.5 - 1.0 + 1.5 + 2.0);
        assert_eq!(s.total_work_hours, 8.5 + 7.0 + 1.5);
        assert_eq!(s.vacation_days, 1);
        assert_eq!(s.on_call_days, 1);
    }

    #[test]
    fn empty_collection_is_all_zero_plus_correction() {
        let s = compute_summary(&[], 4.0, date(TODAY));
        assert_eq!(s.total_overtime, 4.0);
        assert_eq!(s.current_month_overtime, 0.0);
        assert_eq!(s.total_work_hours, 0.0);
        assert_eq!(s.vacation_days, 0);
    }
}
