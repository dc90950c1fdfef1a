use crate::models::VisitorRecord;

/// Weeks since last recorded attendance within which a visitor is still "recent".
pub const RECENT_WEEKS: u32 = 4;

#[derive(Debug, Default)]
pub struct Classified<'a> {
    pub recent: Vec<&'a VisitorRecord>,
    pub older: Vec<&'a VisitorRecord>,
}

pub fn is_recent(record: &VisitorRecord, current_week: u32, threshold_weeks: u32) -> bool {
    let cutoff = i64::from(current_week) - i64::from(threshold_weeks);
    // A record with no recorded weeks has nothing to be recent about.
    record
        .highest_week()
        .is_some_and(|week| i64::from(week) >= cutoff)
}

/// Splits records into recent and older visitors, keeping input order in both.
pub fn classify(
    records: &[VisitorRecord],
    current_week: u32,
    threshold_weeks: u32,
) -> Classified<'_> {
    let (recent, older): (Vec<_>, Vec<_>) = records
        .iter()
        .partition(|record| is_recent(record, current_week, threshold_weeks));
    Classified { recent, older }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attendance;

    fn visitor(name: &str, weeks: &[(u32, bool)]) -> VisitorRecord {
        let mut record = VisitorRecord {
            id: name.into(),
            name: name.into(),
            ..Default::default()
        };
        for &(week, present) in weeks {
            record.attendance.insert(week, Attendance { present, timestamp: None });
        }
        record
    }

    fn names(list: &[&VisitorRecord]) -> Vec<String> {
        list.iter().map(|record| record.name.clone()).collect()
    }

    #[test]
    fn splits_recent_and_older() {
        let records = vec![visitor("A", &[(10, true)]), visitor("B", &[(5, true)])];
        let split = classify(&records, 10, RECENT_WEEKS);
        assert_eq!(names(&split.recent), ["A"]);
        assert_eq!(names(&split.older), ["B"]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let records = vec![
            visitor("edge", &[(16, true)]),
            visitor("past", &[(15, true)]),
            visitor("now", &[(20, true)]),
        ];
        let split = classify(&records, 20, 4);
        assert_eq!(names(&split.recent), ["edge", "now"]);
        assert_eq!(names(&split.older), ["past"]);
    }

    #[test]
    fn highest_week_counts_even_when_absent() {
        let records = vec![visitor("A", &[(2, true), (19, false)])];
        let split = classify(&records, 20, 4);
        assert_eq!(names(&split.recent), ["A"]);
    }

    #[test]
    fn no_weeks_is_older() {
        let records = vec![visitor("new", &[])];
        let split = classify(&records, 1, 4);
        assert!(split.recent.is_empty());
        assert_eq!(names(&split.older), ["new"]);
    }

    #[test]
    fn early_weeks_do_not_underflow() {
        let records = vec![visitor("A", &[(1, false)])];
        let split = classify(&records, 2, 4);
        assert_eq!(names(&split.recent), ["A"]);
    }

    #[test]
    fn every_record_lands_in_exactly_one_list() {
        let records: Vec<_> = (0..30)
            .map(|i| {
                let weeks: Vec<_> = (0..i % 4).map(|k| (i + k * 3, k % 2 == 0)).collect();
                visitor(&format!("v{i}"), &weeks)
            })
            .collect();

        for current in [1, 10, 25, 53] {
            let split = classify(&records, current, RECENT_WEEKS);
            assert_eq!(split.recent.len() + split.older.len(), records.len());
            let mut seen: Vec<_> = names(&split.recent);
            seen.extend(names(&split.older));
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), records.len());
        }
    }

    #[test]
    fn preserves_input_order() {
        let records = vec![
            visitor("c", &[(9, true)]),
            visitor("a", &[(1, true)]),
            visitor("b", &[(10, true)]),
            visitor("d", &[(2, true)]),
        ];
        let split = classify(&records, 10, 4);
        assert_eq!(names(&split.recent), ["c", "b"]);
        assert_eq!(names(&split.older), ["a", "d"]);
    }
}
