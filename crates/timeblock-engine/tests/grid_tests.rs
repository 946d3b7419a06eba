//! Tests for slot-grid generation.

use timeblock_engine::{generate_slots, Booking, TimeSlot, TimeblockError, WallClock};

fn t(s: &str) -> WallClock {
    s.parse().unwrap()
}

fn slot(start: &str, end: &str, available: bool) -> TimeSlot {
    TimeSlot {
        start: t(start),
        end: t(end),
        available,
    }
}

#[test]
fn nine_to_ten_with_one_booking() {
    let bookings = vec![Booking::new("b1", t("09:30"), t("09:45"))];

    let slots = generate_slots(9, 10, &bookings).unwrap();

    assert_eq!(
        &slots[..4],
        &[
            slot("09:00", "09:15", true),
            slot("09:15", "09:30", true),
            slot("09:30", "09:45", false),
            slot("09:45", "10:00", true),
        ]
    );
}

#[test]
fn last_quarter_of_end_hour_is_dropped() {
    let slots = generate_slots(9, 10, &[]).unwrap();

    // 09:00..10:00 (4 slots) + 10:00, 10:15, 10:30. 10:45-11:00 would cross
    // into hour 11 and is dropped.
    assert_eq!(slots.len(), 7);
    assert_eq!(slots.last().unwrap(), &slot("10:30", "10:45", true));
}

#[test]
fn single_hour_window_has_three_slots() {
    let slots = generate_slots(14, 14, &[]).unwrap();

    assert_eq!(
        slots,
        vec![
            slot("14:00", "14:15", true),
            slot("14:15", "14:30", true),
            slot("14:30", "14:45", true),
        ]
    );
}

#[test]
fn default_application_window() {
    let slots = generate_slots(5, 23, &[]).unwrap();

    assert_eq!(slots.len(), 18 * 4 + 3);
    assert_eq!(slots[0].start, t("05:00"));
    assert_eq!(slots.last().unwrap().end, t("23:45"));
}

#[test]
fn grid_is_contiguous_and_uniform() {
    let slots = generate_slots(0, 23, &[]).unwrap();

    assert!(slots.iter().all(|s| s.duration_minutes() == 15));
    assert!(slots.windows(2).all(|w| w[0].end == w[1].start));
}

#[test]
fn partial_overlap_marks_whole_slot_busy() {
    // 10:05-10:20 touches both the 10:00 and the 10:15 slot.
    let bookings = vec![Booking::new("b1", t("10:05"), t("10:20"))];

    let slots = generate_slots(10, 10, &bookings).unwrap();

    assert_eq!(
        slots,
        vec![
            slot("10:00", "10:15", false),
            slot("10:15", "10:30", false),
            slot("10:30", "10:45", true),
        ]
    );
}

#[test]
fn booking_ending_on_boundary_leaves_next_slot_free() {
    let bookings = vec![Booking::new("b1", t("08:00"), t("08:30"))];

    let slots = generate_slots(8, 8, &bookings).unwrap();

    let availability: Vec<bool> = slots.iter().map(|s| s.available).collect();
    assert_eq!(availability, vec![false, false, true]);
}

#[test]
fn booking_outside_window_has_no_effect() {
    let bookings = vec![Booking::new("late", t("21:00"), t("22:00"))];

    let slots = generate_slots(6, 8, &bookings).unwrap();

    assert!(slots.iter().all(|s| s.available));
}

#[test]
fn same_input_same_grid() {
    let bookings = vec![
        Booking::new("b1", t("12:00"), t("13:00")),
        Booking::new("b2", t("06:10"), t("06:50")),
    ];

    assert_eq!(
        generate_slots(5, 23, &bookings).unwrap(),
        generate_slots(5, 23, &bookings).unwrap()
    );
}

#[test]
fn invalid_hour_ranges_rejected() {
    assert_eq!(
        generate_slots(10, 9, &[]),
        Err(TimeblockError::InvalidHourRange { start: 10, end: 9 })
    );
    assert!(generate_slots(5, 24, &[]).is_err());
    assert!(generate_slots(24, 24, &[]).is_err());
}

#[test]
fn slot_contains_is_half_open() {
    let s = slot("09:15", "09:30", true);

    assert!(!s.contains(t("09:14")));
    assert!(s.contains(t("09:15")));
    assert!(s.contains(t("09:29")));
    assert!(!s.contains(t("09:30")));
}
