use chrono::{Duration, NaiveDateTime, NaiveTime};

/// Daily reference slots as minutes after midnight: 07:36, 07:52, 08:36.
const SLOT_MINUTES: [i64; 3] = [7 * 60 + 36, 7 * 60 + 52, 8 * 60 + 36];

/// Returns the first of today's slots at or after `now` (inclusive).
/// Once all slots have passed, the last slot is returned.
pub fn next_slot(now: NaiveDateTime) -> NaiveDateTime {
    let midnight = now.date().and_time(NaiveTime::MIN);
    SLOT_MINUTES
        .iter()
        .map(|&minutes| midnight + Duration::minutes(minutes))
        .find(|slot| *slot >= now)
        .unwrap_or(midnight + Duration::minutes(SLOT_MINUTES[2]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 30)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn picks_the_next_upcoming_slot() {
        assert_eq!(next_slot(at(7, 40)), at(7, 52));
        assert_eq!(next_slot(at(6, 0)), at(7, 36));
        assert_eq!(next_slot(at(8, 0)), at(8, 36));
    }

    #[test]
    fn falls_back_to_the_last_slot_after_all_have_passed() {
        assert_eq!(next_slot(at(9, 0)), at(8, 36));
        assert_eq!(next_slot(at(23, 59)), at(8, 36));
    }

    #[test]
    fn slot_boundary_is_inclusive() {
        assert_eq!(next_slot(at(7, 36)), at(7, 36));
        assert_eq!(next_slot(at(8, 36)), at(8, 36));
    }

    #[test]
    fn is_deterministic() {
        let now = at(7, 45);
        assert_eq!(next_slot(now), next_slot(now));
    }

    #[test]
    fn slots_land_on_the_same_date_as_now() {
        let slot = next_slot(at(7, 40));
        assert_eq!(slot.date(), at(7, 40).date());
    }
}
