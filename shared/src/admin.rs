//! Admin Query/Aggregate
//!
//! Read-only views over the fetched record set: attendance filter,
//! name search, dashboard statistics and CSV export. Nothing here mutates
//! persisted data.

use serde::{Deserialize, Serialize};

use crate::models::{RsvpRecord, StoredRsvp};

/// Shown when the bulk read fails; retry is an explicit user action
pub const MSG_LOAD_FAILED: &str = "No se pudieron cargar los datos de confirmaciones.";

/// CSV header row, fixed column order
const CSV_HEADERS: [&str; 12] = [
    "Nombre",
    "Apellido",
    "Asiste",
    "Restricciones Dietéticas",
    "Tiene Acompañante",
    "Nombre Acompañante",
    "Apellido Acompañante",
    "Restricciones Acompañante",
    "Número de Niños",
    "Servicio Bus",
    "Sugerencia Musical",
    "Fecha Envío",
];

/// Attendance filter modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceFilter {
    #[default]
    All,
    Attending,
    NotAttending,
}

impl AttendanceFilter {
    fn matches(&self, record: &RsvpRecord) -> bool {
        match self {
            AttendanceFilter::All => true,
            AttendanceFilter::Attending => record.will_attend(),
            AttendanceFilter::NotAttending => !record.will_attend(),
        }
    }
}

/// Keep records matching the attendance mode, order preserved
pub fn filter(records: &[StoredRsvp], mode: AttendanceFilter) -> Vec<StoredRsvp> {
    records
        .iter()
        .filter(|r| mode.matches(&r.record))
        .cloned()
        .collect()
}

/// Case-insensitive substring search across guest and companion names
///
/// The empty term matches everything; order is preserved.
pub fn search(records: &[StoredRsvp], term: &str) -> Vec<StoredRsvp> {
    if term.is_empty() {
        return records.to_vec();
    }
    let term = term.to_lowercase();
    records
        .iter()
        .filter(|r| {
            let record = &r.record;
            record.name().to_lowercase().contains(&term)
                || record.last_name().to_lowercase().contains(&term)
                || record
                    .companion_name()
                    .is_some_and(|n| n.to_lowercase().contains(&term))
                || record
                    .companion_last_name()
                    .is_some_and(|n| n.to_lowercase().contains(&term))
        })
        .cloned()
        .collect()
}

/// Dashboard counters derived from the full record set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total: usize,
    pub attending: usize,
    pub not_attending: usize,
    pub with_companion: usize,
    /// Attending heads: guest + companion + children per attending record
    pub total_guests: u64,
}

pub fn statistics(records: &[StoredRsvp]) -> Statistics {
    let total = records.len();
    let attending = records.iter().filter(|r| r.record.will_attend()).count();
    let with_companion = records
        .iter()
        .filter(|r| r.record.will_attend() && r.record.has_companion())
        .count();
    let total_guests = records
        .iter()
        .filter(|r| r.record.will_attend())
        .map(|r| {
            1 + u64::from(r.record.has_companion())
                + u64::from(r.record.number_of_children().unwrap_or(0))
        })
        .sum();

    Statistics {
        total,
        attending,
        not_attending: total - attending,
        with_companion,
        total_guests,
    }
}

/// Format a submission timestamp for display and export
///
/// Millisecond timestamps outside chrono's range render as the same
/// placeholder the dashboard shows for unreadable dates.
pub fn format_submitted_at(millis: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(millis) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => "Fecha inválida".to_string(),
    }
}

/// Export filename for a given day: `rsvps_<ISO-date>.csv`
pub fn export_filename(date: chrono::NaiveDate) -> String {
    format!("rsvps_{}.csv", date.format("%Y-%m-%d"))
}

fn csv_cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Serialize records to CSV, one row per record, every cell quoted
///
/// Missing values render as empty cells, except the children count which
/// defaults to 0. Attendance and companion flags render as Sí/No.
pub fn to_csv(records: &[StoredRsvp]) -> String {
    let si_no = |flag: bool| if flag { "Sí" } else { "No" };

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(
        CSV_HEADERS
            .iter()
            .map(|h| csv_cell(h))
            .collect::<Vec<_>>()
            .join(","),
    );

    for stored in records {
        let record = &stored.record;
        let children = record.number_of_children().unwrap_or(0).to_string();
        let cells = [
            record.name(),
            record.last_name(),
            si_no(record.will_attend()),
            record.dietary_restrictions().unwrap_or(""),
            si_no(record.has_companion()),
            record.companion_name().unwrap_or(""),
            record.companion_last_name().unwrap_or(""),
            record.companion_dietary_restrictions().unwrap_or(""),
            &children,
            record.bus_service().map(|b| b.as_str()).unwrap_or(""),
            record.song_suggestion().unwrap_or(""),
            &format_submitted_at(record.submitted_at()),
        ];
        lines.push(cells.map(csv_cell).join(","));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendingRecord, BusService, DeclinedRecord};

    fn declined(name: &str, last_name: &str, at: i64) -> StoredRsvp {
        StoredRsvp {
            id: format!("rsvp:{name}"),
            record: RsvpRecord::Declined(DeclinedRecord {
                name: name.to_string(),
                last_name: last_name.to_string(),
                will_attend: false,
                submitted_at: at,
                user_agent: "test".to_string(),
            }),
        }
    }

    fn attending(
        name: &str,
        last_name: &str,
        companion: Option<(&str, &str)>,
        children: u8,
        at: i64,
    ) -> StoredRsvp {
        StoredRsvp {
            id: format!("rsvp:{name}"),
            record: RsvpRecord::Attending(AttendingRecord {
                name: name.to_string(),
                last_name: last_name.to_string(),
                will_attend: true,
                submitted_at: at,
                user_agent: "test".to_string(),
                dietary_restrictions: None,
                has_companion: companion.is_some(),
                companion_name: companion.map(|(n, _)| Some(n.to_string())),
                companion_last_name: companion.map(|(_, l)| Some(l.to_string())),
                companion_dietary_restrictions: companion.map(|_| None),
                number_of_children: children,
                bus_service: BusService::None,
                song_suggestion: None,
            }),
        }
    }

    fn sample() -> Vec<StoredRsvp> {
        vec![
            attending("Ana", "Ruiz", Some(("Mar", "Sol")), 2, 300),
            declined("Luis", "Paz", 200),
            attending("Eva", "Gil", None, 0, 100),
        ]
    }

    #[test]
    fn filter_splits_by_attendance() {
        let records = sample();
        assert_eq!(filter(&records, AttendanceFilter::All).len(), 3);
        let attending = filter(&records, AttendanceFilter::Attending);
        assert_eq!(attending.len(), 2);
        assert!(attending.iter().all(|r| r.record.will_attend()));
        let declined = filter(&records, AttendanceFilter::NotAttending);
        assert_eq!(declined.len(), 1);
        assert_eq!(declined[0].record.name(), "Luis");
    }

    #[test]
    fn empty_search_returns_input_unchanged() {
        let records = sample();
        assert_eq!(search(&records, ""), records);
    }

    #[test]
    fn search_matches_companion_names_case_insensitively() {
        let records = sample();
        let hits = search(&records, "MAR");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record.name(), "Ana");

        let hits = search(&records, "paz");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record.name(), "Luis");

        assert!(search(&records, "nadie").is_empty());
    }

    #[test]
    fn statistics_are_additive() {
        let records = sample();
        let stats = statistics(&records);
        assert_eq!(stats.attending + stats.not_attending, stats.total);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.attending, 2);
        assert_eq!(stats.with_companion, 1);
        // Ana + Mar + 2 children, Eva alone; Luis contributes nothing
        assert_eq!(stats.total_guests, 5);
    }

    #[test]
    fn statistics_on_empty_set_are_zero() {
        let stats = statistics(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.total_guests, 0);
    }

    #[test]
    fn csv_defaults_missing_children_to_zero() {
        let records = vec![declined("Luis", "Paz", 200)];
        let csv = to_csv(&records);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "\"Luis\",\"Paz\",\"No\",\"\",\"No\",\"\",\"\",\"\",\"0\",\"\",\"\",\"01/01/1970 00:00\""
        );
    }

    #[test]
    fn csv_quotes_every_cell_and_escapes_quotes() {
        let mut records = vec![attending("Ana", "Ruiz", Some(("Mar", "Sol")), 2, 300)];
        if let RsvpRecord::Attending(r) = &mut records[0].record {
            r.song_suggestion = Some("\"Vivir\" en directo".to_string());
        }
        let csv = to_csv(&records);
        let header = csv.lines().next().unwrap();
        assert!(header.starts_with("\"Nombre\",\"Apellido\",\"Asiste\""));
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains("\"Sí\""));
        assert!(row.contains("\"\"\"Vivir\"\" en directo\""));
        assert!(row.contains("\"Mar\""));
    }

    #[test]
    fn export_filename_uses_iso_date() {
        let date = chrono::NaiveDate::from_ymd_opt(2025, 9, 6).unwrap();
        assert_eq!(export_filename(date), "rsvps_2025-09-06.csv");
    }

    #[test]
    fn unreadable_timestamp_renders_placeholder() {
        assert_eq!(format_submitted_at(i64::MAX), "Fecha inválida");
    }
}
