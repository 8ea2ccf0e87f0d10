use crate::models::{AppData, RawEntry, ScheduleEntry, Weekday};
use chrono::NaiveTime;
use std::collections::BTreeMap;
use std::fmt;

/// A schedule upload that could not be understood. The caller's state is
/// untouched whenever this is returned.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    BadDay(String),
    BadTime(String),
    EmptySubject { day: String, time: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BadDay(day) => write!(f, "unrecognized day '{day}' (expected Monday-Friday)"),
            ParseError::BadTime(time) => write!(f, "unrecognized time '{time}' (expected HH:MM)"),
            ParseError::EmptySubject { day, time } => {
                write!(f, "empty subject in the {day} {time} slot")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Builds a fresh state from an uploaded schedule.
///
/// Rows are validated, deduplicated by (day, time) with the last row winning,
/// ordered by day then time, and given batch-local ids. Attendance and daily
/// marks start empty; the returned value replaces the old state in one move,
/// so a failed upload can never leave a half-ingested mix behind.
pub fn ingest(entries: &[RawEntry]) -> Result<AppData, ParseError> {
    let mut slots: BTreeMap<(Weekday, String), (String, String)> = BTreeMap::new();

    for raw in entries {
        let day: Weekday = raw
            .day
            .parse()
            .map_err(|_| ParseError::BadDay(raw.day.trim().to_string()))?;
        let time = normalize_time(&raw.time)?;
        let subject = raw.subject.trim();
        if subject.is_empty() {
            return Err(ParseError::EmptySubject {
                day: day.name().to_string(),
                time,
            });
        }
        slots.insert(
            (day, time),
            (subject.to_string(), raw.room.trim().to_string()),
        );
    }

    let timetable = slots
        .into_iter()
        .enumerate()
        .map(|(index, ((day, time), (subject, room)))| ScheduleEntry {
            id: format!("{day}-{time}-{index}"),
            day,
            time,
            subject,
            room,
        })
        .collect();

    Ok(AppData {
        timetable,
        ..AppData::default()
    })
}

fn normalize_time(raw: &str) -> Result<String, ParseError> {
    let trimmed = raw.trim();
    let parsed = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map_err(|_| ParseError::BadTime(trimmed.to_string()))?;
    Ok(parsed.format("%H:%M").to_string())
}
