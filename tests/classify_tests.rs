mod common;
use common::rec;
use taskdiary::core::classify::classify;
use taskdiary::models::record::TaskRecord;

fn sample() -> Vec<TaskRecord> {
    vec![
        rec(0, Some("Monday"), Some("January 6, 2025"), "Wrote the intro"),
        rec(1, Some("Tuesday"), Some("January 7, 2025"), "HOLIDAY"),
        rec(2, Some("Wednesday"), Some("January 8, 2025"), "On Leave"),
        rec(3, Some("Thursday"), Some("January 9, 2025"), "Leave Day"),
        rec(4, Some("Friday"), Some("January 10, 2025"), "Fixed the parser"),
    ]
}

#[test]
fn test_partition_is_disjoint_and_total() {
    let records = sample();
    let cls = classify(&records);

    assert_eq!(cls.content, vec![0, 4]);
    assert_eq!(cls.holiday, vec![1]);
    assert_eq!(cls.leave, vec![2, 3]);

    for i in &cls.content {
        assert!(!cls.holiday.contains(i));
        assert!(!cls.leave.contains(i));
    }

    // Every record lands in exactly one bucket (or is excluded by date)
    for i in 0..records.len() {
        let buckets = [
            cls.content.contains(&i),
            cls.holiday.contains(&i),
            cls.leave.contains(&i),
        ]
        .iter()
        .filter(|b| **b)
        .count();
        assert!(buckets <= 1, "record {i} double-counted");
    }
}

#[test]
fn test_case_insensitive_trimmed_matching() {
    let records = vec![
        rec(0, None, Some("Jan 6"), "  holiday  "),
        rec(1, None, Some("Jan 7"), "ON LEAVE"),
        rec(2, None, Some("Jan 8"), "leave day "),
    ];
    let cls = classify(&records);
    assert_eq!(cls.holiday, vec![0]);
    assert_eq!(cls.leave, vec![1, 2]);
    assert!(cls.content.is_empty());

    // Stored values are untouched
    assert_eq!(records[0].task, "  holiday  ");
}

#[test]
fn test_long_holiday_cell_is_ordinary_content() {
    // Trimmed-lowercase equality plus enough padding to exceed 30 chars
    let padded = format!("{}holiday{}", " ".repeat(15), " ".repeat(15));
    let records = vec![rec(0, None, Some("Jan 6"), &padded)];
    let cls = classify(&records);
    assert!(cls.holiday.is_empty());
    assert!(cls.excluded_dates.is_empty());
    // Not a holiday row, but the label match still keeps it out of the
    // content stream
    assert!(cls.content.is_empty());
}

#[test]
fn test_dedup_by_date_suppresses_sharing_records() {
    // A real task sharing its date with a holiday entry vanishes from
    // every list
    let records = vec![
        rec(0, Some("Monday"), Some("Jan 6"), "HOLIDAY"),
        rec(1, Some("Monday"), Some("Jan 6"), "Write report"),
    ];
    let cls = classify(&records);

    assert_eq!(cls.holiday, vec![0]);
    assert!(cls.leave.is_empty());
    assert!(cls.content.is_empty());
    assert!(cls.excluded_dates.contains("Jan 6"));
}

#[test]
fn test_excluded_dates_are_trimmed() {
    let records = vec![
        rec(0, None, Some(" Jan 6 "), "On Leave"),
        rec(1, None, Some("Jan 6"), "Real work"),
    ];
    let cls = classify(&records);
    assert!(cls.excluded_dates.contains("Jan 6"));
    assert!(cls.content.is_empty());
}

#[test]
fn test_dateless_leave_record_stays_out_of_content() {
    let records = vec![
        rec(0, None, None, "On Leave"),
        rec(1, None, Some("Jan 6"), "Real work"),
    ];
    let cls = classify(&records);
    assert_eq!(cls.leave, vec![0]);
    // No date to exclude, so the real task survives
    assert_eq!(cls.content, vec![1]);
}

#[test]
fn test_classifier_is_idempotent_on_its_content() {
    let records = sample();
    let cls = classify(&records);

    let content_records: Vec<TaskRecord> =
        cls.content_records(&records).cloned().collect();
    let again = classify(&content_records);

    let reclassified: Vec<&TaskRecord> = again.content_records(&content_records).collect();
    assert_eq!(reclassified.len(), content_records.len());
    for (a, b) in reclassified.iter().zip(content_records.iter()) {
        assert_eq!(*a, b);
    }
    assert!(again.holiday.is_empty());
    assert!(again.leave.is_empty());
}

#[test]
fn test_order_is_preserved_within_each_list() {
    let records = vec![
        rec(0, None, Some("d1"), "a"),
        rec(1, None, Some("d2"), "HOLIDAY"),
        rec(2, None, Some("d3"), "b"),
        rec(3, None, Some("d4"), "HOLIDAY"),
        rec(4, None, Some("d5"), "c"),
    ];
    let cls = classify(&records);
    assert_eq!(cls.content, vec![0, 2, 4]);
    assert_eq!(cls.holiday, vec![1, 3]);
}
