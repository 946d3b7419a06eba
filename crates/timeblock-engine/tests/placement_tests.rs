//! Tests for finding a free window of a given duration.

use timeblock_engine::{find_slot, generate_slots, Booking, TimeSlot, WallClock};

fn t(s: &str) -> WallClock {
    s.parse().unwrap()
}

fn found(slot: Option<TimeSlot>) -> Option<(String, String)> {
    slot.map(|s| (s.start.to_string(), s.end.to_string()))
}

fn span(start: &str, end: &str) -> Option<(String, String)> {
    Some((start.to_string(), end.to_string()))
}

#[test]
fn thirty_minutes_at_preferred_start_on_free_grid() {
    let grid = generate_slots(9, 17, &[]).unwrap();

    let slot = find_slot(&grid, 30, Some(t("09:00")));

    assert_eq!(found(slot), span("09:00", "09:30"));
    assert!(slot.unwrap().available);
}

#[test]
fn earliest_window_wins_without_preference() {
    let bookings = vec![Booking::new("b1", t("09:00"), t("09:30"))];
    let grid = generate_slots(9, 12, &bookings).unwrap();

    assert_eq!(found(find_slot(&grid, 60, None)), span("09:30", "10:30"));
}

#[test]
fn partial_slot_durations_round_up() {
    let grid = generate_slots(9, 12, &[]).unwrap();

    // 20 minutes needs two slots.
    assert_eq!(found(find_slot(&grid, 20, None)), span("09:00", "09:30"));
    assert_eq!(found(find_slot(&grid, 1, None)), span("09:00", "09:15"));
}

#[test]
fn window_skips_gaps_too_short_for_duration() {
    let bookings = vec![
        Booking::new("b1", t("09:30"), t("09:45")),
        Booking::new("b2", t("10:30"), t("11:00")),
    ];
    let grid = generate_slots(9, 12, &bookings).unwrap();

    // 09:00-09:30 and 09:45-10:30 are too short for an hour.
    assert_eq!(found(find_slot(&grid, 60, None)), span("11:00", "12:00"));
}

#[test]
fn preferred_start_between_boundaries() {
    let grid = generate_slots(9, 12, &[]).unwrap();

    assert_eq!(
        found(find_slot(&grid, 15, Some(t("09:20")))),
        span("09:30", "09:45")
    );
}

#[test]
fn preferred_start_never_falls_back_to_earlier_window() {
    let bookings = vec![Booking::new("afternoon", t("14:00"), t("23:59"))];
    let grid = generate_slots(9, 16, &bookings).unwrap();

    assert!(find_slot(&grid, 30, None).is_some());
    assert_eq!(find_slot(&grid, 30, Some(t("13:45"))), None);
}

#[test]
fn fully_booked_day_has_no_slot() {
    let bookings = vec![Booking::new("all-day", t("00:00"), t("23:59"))];
    let grid = generate_slots(5, 23, &bookings).unwrap();

    assert_eq!(find_slot(&grid, 15, None), None);
}

#[test]
fn duration_longer_than_grid_has_no_slot() {
    let grid = generate_slots(9, 9, &[]).unwrap();

    assert_eq!(found(find_slot(&grid, 45, None)), span("09:00", "09:45"));
    assert_eq!(find_slot(&grid, 60, None), None);
}

#[test]
fn zero_duration_has_no_slot() {
    let grid = generate_slots(9, 10, &[]).unwrap();

    assert_eq!(find_slot(&grid, 0, None), None);
}

#[test]
fn windows_do_not_bridge_gaps_in_input() {
    let morning = generate_slots(8, 8, &[]).unwrap();
    let afternoon = generate_slots(15, 15, &[]).unwrap();
    let stitched: Vec<TimeSlot> = morning.into_iter().chain(afternoon).collect();

    // 08:30-08:45 followed by 15:00-15:15 is not a 30-minute window.
    assert_eq!(
        found(find_slot(&stitched, 30, Some(t("08:30")))),
        span("15:00", "15:30")
    );
}
