use crate::models::{AppData, DayMark, MarkStatus, SubjectCounters};
use chrono::{Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Records an attendance mark for one class occurrence on one day.
///
/// The daily record makes marking idempotent and reversible within a day:
/// the first mark for a class key is the only one that grows `total`;
/// flipping the mark later the same day adjusts `present` by one and leaves
/// `total` alone; repeating the same mark changes nothing.
pub fn mark_attendance(data: &mut AppData, class_key: &str, subject: &str, is_present: bool) {
    mark_attendance_on(data, today(), class_key, subject, is_present);
}

pub fn mark_attendance_on(
    data: &mut AppData,
    date: NaiveDate,
    class_key: &str,
    subject: &str,
    is_present: bool,
) {
    let day_marks = data.daily_attendance.entry(date_key(date)).or_default();
    let prior = day_marks.get(class_key).copied();
    let counters = data.attendance.entry(subject.to_string()).or_default();

    match prior {
        None => {
            counters.total += 1;
            if is_present {
                counters.present += 1;
            }
        }
        Some(DayMark::Present) if !is_present => {
            counters.present = counters.present.saturating_sub(1);
        }
        Some(DayMark::Absent) if is_present => {
            counters.present = (counters.present + 1).min(counters.total);
        }
        // Same mark again: counters already reflect it.
        Some(_) => {}
    }

    let mark = if is_present {
        DayMark::Present
    } else {
        DayMark::Absent
    };
    day_marks.insert(class_key.to_string(), mark);
}

/// Looks up what was recorded for a class on a given day. Records written
/// before entries carried ids were keyed by bare subject name, so that key is
/// checked second.
pub fn daily_status(data: &AppData, date: NaiveDate, class_key: &str, subject: &str) -> MarkStatus {
    let Some(day_marks) = data.daily_attendance.get(&date_key(date)) else {
        return MarkStatus::None;
    };
    day_marks
        .get(class_key)
        .or_else(|| day_marks.get(subject))
        .copied()
        .map(MarkStatus::from)
        .unwrap_or(MarkStatus::None)
}

/// Replaces a subject's cumulative counters outright, e.g. to import classes
/// held before the app was in use. Inputs are clamped, never rejected. The
/// daily record is untouched, so a mark later the same day still counts as a
/// fresh class on top of the new totals.
pub fn set_counters(data: &mut AppData, subject: &str, total: i64, present: i64) -> SubjectCounters {
    let total = total.max(0).min(u32::MAX as i64) as u32;
    let present = present.max(0).min(total as i64) as u32;
    let counters = SubjectCounters { total, present };
    data.attendance.insert(subject.to_string(), counters);
    counters
}
