//! Report model: the summary block and title/filename conventions shared
//! by the PDF export and the share bundle.

use crate::core::summary::compute_summary;
use crate::core::time_calc::format_hours;
use crate::models::document::TimesheetDocument;
use crate::utils::date::month_title;
use chrono::NaiveDate;

pub struct Report {
    pub title: String,
    pub summary_lines: Vec<String>,
}

/// Build the report header for a document and a report month.
/// `month` doubles as the engine's "current month" reference.
pub fn build_report(doc: &TimesheetDocument, month: NaiveDate) -> Report {
    let metrics = compute_summary(&doc.entries, doc.base_overtime, month);

    let title = if doc.employee_name.is_empty() {
        format!("Timesheet — {}", month_title(month))
    } else {
        format!("Timesheet — {} — {}", doc.employee_name, month_title(month))
    };

    let summary_lines = vec![
        format!("Total overtime:        {}", format_hours(metrics.total_overtime)),
        format!(
            "Overtime in {}:   {}",
            month_title(month),
            format_hours(metrics.current_month_overtime)
        ),
        format!("Total work hours:      {:.2}", metrics.total_work_hours),
        format!(
            "Vacation: {}   Sick: {}   On-call: {}",
            metrics.vacation_days, metrics.sick_days, metrics.on_call_days
        ),
    ];

    Report {
        title,
        summary_lines,
    }
}

/// Default report filename, derived from the selected month.
pub fn report_filename(month: NaiveDate) -> String {
    format!("stundenzettel_{}.pdf", month.format("%Y-%m"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_derives_from_month() {
        let m = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(report_filename(m), "stundenzettel_2025-03.pdf");
    }

    #[test]
    fn title_includes_employee_when_set() {
        let mut doc = TimesheetDocument::default();
        let m = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(build_report(&doc, m).title, "Timesheet — March 2025");

        doc.employee_name = "Anna Schmidt".into();
        assert_eq!(
            build_report(&doc, m).title,
            "Timesheet — Anna Schmidt — March 2025"
        );
    }

    #[test]
    fn summary_block_uses_signed_hours() {
        let doc = TimesheetDocument {
            base_overtime: 1.5,
            ..Default::default()
        };
        let m = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let report = build_report(&doc, m);
        assert!(report.summary_lines[0].contains("+1.50"));
        assert!(report.summary_lines[1].contains("+0.00"));
    }
}
