use crate::models::SubjectCounters;
use serde::Serialize;

pub const DEFAULT_THRESHOLD: u8 = 75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Unknown,
    Good,
    Warning,
    Danger,
}

/// Threshold-relative metrics derived from one subject's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub percentage: u32,
    #[serde(rename = "canMiss")]
    pub can_miss: u32,
    #[serde(rename = "needToAttend")]
    pub need_to_attend: u32,
    pub status: Status,
}

/// Computes the attendance percentage, the number of classes that can still
/// be skipped without dropping below `threshold`, and the number of classes
/// that must be attended in a row to climb back to it.
///
/// `can_miss` is the largest m with present / (total + m) >= threshold;
/// `need_to_attend` the smallest n with (present + n) / (total + n) >= threshold.
pub fn project(counters: SubjectCounters, threshold: u8) -> Projection {
    if counters.total == 0 {
        return Projection {
            percentage: 0,
            can_miss: 0,
            need_to_attend: 0,
            status: Status::Unknown,
        };
    }

    let present = counters.present as f64;
    let total = counters.total as f64;
    let ratio = f64::from(threshold) / 100.0;

    let percentage = (present / total * 100.0).round() as u32;

    let can_miss = ((present - ratio * total) / ratio).floor().max(0.0) as u32;

    let need_to_attend = if percentage < u32::from(threshold) {
        ((ratio * total - present) / (1.0 - ratio)).ceil().max(0.0) as u32
    } else {
        0
    };

    let status = if percentage >= u32::from(threshold) {
        Status::Good
    } else if percentage + 10 >= u32::from(threshold) {
        Status::Warning
    } else {
        Status::Danger
    };

    Projection {
        percentage,
        can_miss,
        need_to_attend,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(present: u32, total: u32) -> SubjectCounters {
        SubjectCounters { total, present }
    }

    #[test]
    fn zero_total_is_unknown_for_any_threshold() {
        for threshold in [1, 50, 75, 99] {
            let p = project(c(0, 0), threshold);
            assert_eq!(p.percentage, 0);
            assert_eq!(p.can_miss, 0);
            assert_eq!(p.need_to_attend, 0);
            assert_eq!(p.status, Status::Unknown);
        }
    }

    #[test]
    fn below_threshold_needs_recovery_classes() {
        let p = project(c(70, 100), 75);
        assert_eq!(p.percentage, 70);
        assert_eq!(p.status, Status::Warning);
        assert_eq!(p.can_miss, 0);
        // (0.75 * 100 - 70) / 0.25 = 20
        assert_eq!(p.need_to_attend, 20);
    }

    #[test]
    fn above_threshold_has_a_miss_budget() {
        let p = project(c(90, 100), 75);
        assert_eq!(p.percentage, 90);
        assert_eq!(p.status, Status::Good);
        // (90 - 75) / 0.75 = 20
        assert_eq!(p.can_miss, 20);
        assert_eq!(p.need_to_attend, 0);
    }

    #[test]
    fn miss_budget_is_exact_at_the_edge() {
        // 90 / (100 + 20) = 75% exactly; one more miss drops below.
        let p = project(c(90, 100), 75);
        let after_budget = c(90, 100 + p.can_miss);
        assert!(project(after_budget, 75).percentage >= 75);
        let one_too_many = c(90, 100 + p.can_miss + 1);
        assert!((90.0 / f64::from(one_too_many.total)) * 100.0 < 75.0);
    }

    #[test]
    fn recovery_count_is_exact_at_the_edge() {
        let p = project(c(70, 100), 75);
        let n = p.need_to_attend;
        assert!(f64::from(70 + n) / f64::from(100 + n) >= 0.75);
        if n > 0 {
            assert!(f64::from(70 + n - 1) / f64::from(100 + n - 1) < 0.75);
        }
    }

    #[test]
    fn status_bands_are_absolute_offsets() {
        assert_eq!(project(c(75, 100), 75).status, Status::Good);
        assert_eq!(project(c(74, 100), 75).status, Status::Warning);
        assert_eq!(project(c(65, 100), 75).status, Status::Warning);
        assert_eq!(project(c(64, 100), 75).status, Status::Danger);
    }

    #[test]
    fn at_threshold_exactly_can_miss_is_zero() {
        let p = project(c(3, 4), 75);
        assert_eq!(p.percentage, 75);
        assert_eq!(p.status, Status::Good);
        assert_eq!(p.can_miss, 0);
        assert_eq!(p.need_to_attend, 0);
    }

    #[test]
    fn full_attendance_small_totals() {
        let p = project(c(1, 1), 75);
        assert_eq!(p.percentage, 100);
        assert_eq!(p.status, Status::Good);
        // 1 / (1 + m) >= 0.75 only for m = 0.
        assert_eq!(p.can_miss, 0);

        let p = project(c(4, 4), 75);
        // 4 / 5 = 80% still passes; 4 / 6 does not.
        assert_eq!(p.can_miss, 1);
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        assert_eq!(project(c(2, 3), 75).percentage, 67);
        assert_eq!(project(c(1, 3), 75).percentage, 33);
        assert_eq!(project(c(5, 8), 75).percentage, 63);
    }
}
