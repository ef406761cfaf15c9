use crate::core::store::sort_for_display;
use crate::core::time_calc::elapsed_hours;
use crate::models::entry::Entry;
use crate::models::kind::Kind;
use serde::Serialize;

/// Flattened entry row shared by the CSV export, the PDF table and the
/// CLI list view. Always produced in canonical display order.
#[derive(Debug, Serialize)]
pub struct EntryExport {
    pub id: i64,
    pub date: String,
    pub kind: String,
    pub location: String,
    pub start: String,
    pub end: String,
    pub hours: String,
    pub note: String,
}

impl EntryExport {
    fn from_entry(entry: &Entry) -> Self {
        let kind = entry.kind();

        let hours = match kind {
            Kind::Regular => format!("{:.2}", elapsed_hours(entry.start, entry.end)),
            Kind::OnCall => {
                let total: f64 = entry
                    .deployments
                    .iter()
                    .map(|d| elapsed_hours(d.start, d.end))
                    .sum();
                format!("{total:.2}")
            }
            _ => String::new(),
        };

        let note = match kind {
            Kind::Sick if entry.child_sick => "child sick".to_string(),
            Kind::OnCall if !entry.deployments.is_empty() => {
                format!("{} deployment(s)", entry.deployments.len())
            }
            _ => String::new(),
        };

        Self {
            id: entry.id,
            date: entry.date_str(),
            kind: kind.as_str().to_string(),
            location: entry.location.clone(),
            start: entry.start_str(),
            end: entry.end_str(),
            hours,
            note,
        }
    }
}

pub fn get_headers() -> Vec<&'static str> {
    vec!["ID", "Date", "Kind", "Location", "Start", "End", "Hours", "Note"]
}

/// Entries → export rows, sorted in canonical display order.
pub fn entries_to_exports(entries: &[Entry]) -> Vec<EntryExport> {
    let mut sorted = entries.to_vec();
    sort_for_display(&mut sorted);
    sorted.iter().map(EntryExport::from_entry).collect()
}

pub fn exports_to_table(rows: &[EntryExport]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.date.clone(),
                r.kind.clone(),
                r.location.clone(),
                r.start.clone(),
                r.end.clone(),
                r.hours.clone(),
                r.note.clone(),
            ]
        })
        .collect()
}
