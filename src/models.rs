use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Weekdays the timetable covers. Serialized as the full English name so the
/// persisted document matches what spreadsheet headers produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    /// Saturday and Sunday have no slot in the weekly grid.
    pub fn from_chrono(day: chrono::Weekday) -> Option<Self> {
        match day {
            chrono::Weekday::Mon => Some(Weekday::Monday),
            chrono::Weekday::Tue => Some(Weekday::Tuesday),
            chrono::Weekday::Wed => Some(Weekday::Wednesday),
            chrono::Weekday::Thu => Some(Weekday::Thursday),
            chrono::Weekday::Fri => Some(Weekday::Friday),
            chrono::Weekday::Sat | chrono::Weekday::Sun => None,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        for day in Weekday::ALL {
            let name = day.name().to_ascii_lowercase();
            if lower == name || (lower.len() >= 3 && name.starts_with(&lower)) {
                return Ok(day);
            }
        }
        Err(())
    }
}

/// One slot in the weekly grid. `id` is assigned at ingestion and is stable
/// until the next upload replaces the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub day: Weekday,
    pub time: String,
    pub subject: String,
    pub room: String,
    pub id: String,
}

/// Cumulative per-subject counters. Every mutation keeps `present <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SubjectCounters {
    pub total: u32,
    pub present: u32,
}

/// Last recorded outcome for one class occurrence on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayMark {
    Present,
    Absent,
}

/// Answer to "what did I record for this class today?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkStatus {
    None,
    Present,
    Absent,
}

impl From<DayMark> for MarkStatus {
    fn from(mark: DayMark) -> Self {
        match mark {
            DayMark::Present => MarkStatus::Present,
            DayMark::Absent => MarkStatus::Absent,
        }
    }
}

pub type DailyMarks = BTreeMap<String, BTreeMap<String, DayMark>>;

/// The whole persisted state. Older saved documents predate `dailyAttendance`,
/// so that field defaults to empty on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppData {
    pub timetable: Vec<ScheduleEntry>,
    pub attendance: BTreeMap<String, SubjectCounters>,
    #[serde(rename = "dailyAttendance", default)]
    pub daily_attendance: DailyMarks,
}

#[derive(Debug, Deserialize)]
pub struct MarkRequest {
    #[serde(rename = "classId")]
    pub class_id: String,
    pub subject: String,
    pub present: bool,
}

#[derive(Debug, Deserialize)]
pub struct SetCountersRequest {
    pub subject: String,
    pub total: i64,
    pub present: i64,
}

#[derive(Debug, Deserialize)]
pub struct IngestRequest {
    pub entries: Vec<RawEntry>,
}

/// A schedule row as the upstream parser hands it over, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    pub day: String,
    pub time: String,
    pub subject: String,
    #[serde(default)]
    pub room: String,
}

#[derive(Debug, Serialize)]
pub struct TodayClass {
    pub id: String,
    pub time: String,
    pub subject: String,
    pub room: String,
    pub status: MarkStatus,
}

#[derive(Debug, Serialize)]
pub struct TodayResponse {
    pub date: String,
    pub day: Option<Weekday>,
    pub classes: Vec<TodayClass>,
}

#[derive(Debug, Serialize)]
pub struct SubjectReport {
    pub subject: String,
    pub total: u32,
    pub present: u32,
    #[serde(flatten)]
    pub projection: crate::projection::Projection,
}

#[derive(Debug, Serialize)]
pub struct SubjectsResponse {
    pub threshold: u8,
    pub subjects: Vec<SubjectReport>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub entries: Vec<ScheduleEntry>,
}
