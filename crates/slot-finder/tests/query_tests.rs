//! Tests for meeting slot queries, including the optional-attendee fallback.

use slot_finder::{
    find_first_slot, free_slots, query, query_detailed, Event, Honored, MeetingRequest, TimeRange,
    END_OF_DAY, START_OF_DAY,
};
use std::collections::HashSet;

// ── Helpers ─────────────────────────────────────────────────────────────────

const PERSON_A: &str = "Person A";
const PERSON_B: &str = "Person B";
const PERSON_C: &str = "Person C";

const DURATION_30_MINUTES: u32 = 30;
const DURATION_60_MINUTES: u32 = 60;
const DURATION_90_MINUTES: u32 = 90;
const DURATION_1_HOUR: u32 = 60;
const DURATION_2_HOUR: u32 = 120;

fn at(hours: u32, minutes: u32) -> u32 {
    TimeRange::minutes_of(hours, minutes)
}

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::from_start_end(start, end, false)
}

fn event(start: u32, end: u32, attendees: &[&str]) -> Event {
    Event::new(range(start, end), attendees.iter().copied())
}

// ── Degenerate inputs ───────────────────────────────────────────────────────

#[test]
fn no_events_whole_day_is_free() {
    let request = MeetingRequest::new([PERSON_A, PERSON_B], DURATION_30_MINUTES);

    let slots = query(&[], &request);

    assert_eq!(slots, vec![TimeRange::WHOLE_DAY]);
    assert!(slots[0].is_end_inclusive());
}

#[test]
fn no_attendees_whole_day_is_free() {
    let events = vec![event(at(8, 0), at(9, 0), &[PERSON_A])];
    let request = MeetingRequest::new(Vec::<String>::new(), DURATION_60_MINUTES);

    assert_eq!(query(&events, &request), vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn duration_longer_than_a_day_has_no_options() {
    let request = MeetingRequest::new([PERSON_A], END_OF_DAY + 1);

    assert!(query(&[], &request).is_empty());
    let events = vec![event(at(8, 0), at(9, 0), &[PERSON_A])];
    assert!(query(&events, &request).is_empty());
}

#[test]
fn whole_day_duration_fits_empty_day() {
    let request = MeetingRequest::new([PERSON_A], END_OF_DAY);
    assert_eq!(query(&[], &request), vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn fully_booked_day_has_no_options() {
    let events = vec![event(START_OF_DAY, END_OF_DAY, &[PERSON_A])];
    let request = MeetingRequest::new([PERSON_A], DURATION_30_MINUTES);

    assert!(query(&events, &request).is_empty());
}

// ── Event splitting ─────────────────────────────────────────────────────────

#[test]
fn events_split_the_day() {
    // Events  :       |--A--|     |--B--|
    // Day     : |-----------------------------|
    // Options : |--1--|     |--2--|     |--3--|
    let events = vec![
        event(at(8, 0), at(8, 30), &[PERSON_A]),
        event(at(9, 0), at(10, 0), &[PERSON_B]),
    ];
    let request = MeetingRequest::new([PERSON_A, PERSON_B], DURATION_30_MINUTES);

    let slots = query(&events, &request);

    assert_eq!(
        slots,
        vec![
            range(START_OF_DAY, at(8, 0)),
            range(at(8, 30), at(9, 0)),
            range(at(10, 0), END_OF_DAY),
        ]
    );
}

#[test]
fn overlapping_events_merge() {
    // Events  :       |--A--|
    //                     |--B--|
    // Options : |--1--|         |--2--|
    let events = vec![
        event(at(8, 30), at(9, 30), &[PERSON_A]),
        event(at(9, 0), at(10, 0), &[PERSON_B]),
    ];
    let request = MeetingRequest::new([PERSON_A, PERSON_B], DURATION_30_MINUTES);

    assert_eq!(
        query(&events, &request),
        vec![range(START_OF_DAY, at(8, 30)), range(at(10, 0), END_OF_DAY)]
    );
}

#[test]
fn nested_events_merge() {
    // Events  :       |----A----|
    //                   |--B--|
    // Options : |--1--|         |--2--|
    let events = vec![
        event(at(8, 30), at(10, 30), &[PERSON_A]),
        event(at(9, 0), at(10, 0), &[PERSON_B]),
    ];
    let request = MeetingRequest::new([PERSON_A, PERSON_B], DURATION_30_MINUTES);

    assert_eq!(
        query(&events, &request),
        vec![range(START_OF_DAY, at(8, 30)), range(at(10, 30), END_OF_DAY)]
    );
}

#[test]
fn double_booked_attendee_keeps_counter_open() {
    // Person A is in two meetings at once; both must end before A is free.
    let events = vec![
        event(at(8, 30), at(9, 30), &[PERSON_A]),
        event(at(8, 30), at(9, 0), &[PERSON_A]),
    ];
    let request = MeetingRequest::new([PERSON_A], DURATION_30_MINUTES);

    assert_eq!(
        query(&events, &request),
        vec![range(START_OF_DAY, at(8, 30)), range(at(9, 30), END_OF_DAY)]
    );
}

#[test]
fn back_to_back_events_leave_no_gap() {
    let events = vec![event(0, 600, &[PERSON_A]), event(600, 900, &[PERSON_A])];

    let request = MeetingRequest::new([PERSON_A], DURATION_30_MINUTES);
    assert_eq!(query(&events, &request), vec![range(900, END_OF_DAY)]);

    // With a zero duration the empty gap before the 00:00 meeting qualifies,
    // but the touching boundary at 600 still does not.
    let request = MeetingRequest::new([PERSON_A], 0);
    let slots = query(&events, &request);
    assert_eq!(slots, vec![range(0, 0), range(900, END_OF_DAY)]);
    assert!(
        slots.iter().all(|s| s.start() != 600),
        "touching boundary must not produce a slot: {slots:?}"
    );
}

#[test]
fn back_to_back_from_different_attendees_leave_no_gap() {
    let events = vec![
        event(at(8, 30), at(9, 0), &[PERSON_A]),
        event(at(9, 0), at(9, 30), &[PERSON_B]),
    ];
    let request = MeetingRequest::new([PERSON_A, PERSON_B], DURATION_30_MINUTES);

    assert_eq!(
        query(&events, &request),
        vec![range(START_OF_DAY, at(8, 30)), range(at(9, 30), END_OF_DAY)]
    );
}

#[test]
fn just_enough_room() {
    // Events  : |--A-|     |----A----|
    // Options :      |-----|
    let events = vec![
        event(START_OF_DAY, at(8, 30), &[PERSON_A]),
        event(at(9, 0), END_OF_DAY, &[PERSON_A]),
    ];
    let request = MeetingRequest::new([PERSON_A], DURATION_30_MINUTES);

    assert_eq!(query(&events, &request), vec![range(at(8, 30), at(9, 0))]);
}

#[test]
fn not_enough_room() {
    let events = vec![
        event(START_OF_DAY, at(8, 30), &[PERSON_A]),
        event(at(9, 0), END_OF_DAY, &[PERSON_A]),
    ];
    let request = MeetingRequest::new([PERSON_A], DURATION_60_MINUTES);

    assert!(query(&events, &request).is_empty());
}

#[test]
fn ignores_people_not_attending() {
    let events = vec![event(at(8, 0), at(9, 0), &[PERSON_A])];
    let request = MeetingRequest::new([PERSON_B], DURATION_30_MINUTES);

    assert_eq!(query(&events, &request), vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn event_order_does_not_matter() {
    let mut events = vec![
        event(at(13, 0), at(14, 0), &[PERSON_A]),
        event(at(8, 0), at(9, 0), &[PERSON_B]),
        event(at(10, 0), at(11, 0), &[PERSON_A, PERSON_B]),
    ];
    let request = MeetingRequest::new([PERSON_A, PERSON_B], DURATION_1_HOUR);

    let forward = query(&events, &request);
    events.reverse();
    assert_eq!(query(&events, &request), forward);
    assert_eq!(forward.len(), 4);
}

// ── Optional attendees ──────────────────────────────────────────────────────

#[test]
fn optional_attendee_is_honored_when_possible() {
    // Person C is busy all afternoon; including C still leaves morning slots.
    let events = vec![
        event(at(8, 0), at(8, 30), &[PERSON_A]),
        event(at(9, 0), at(10, 0), &[PERSON_B]),
        event(at(12, 0), END_OF_DAY, &[PERSON_C]),
    ];
    let request = MeetingRequest::new([PERSON_A, PERSON_B], DURATION_30_MINUTES)
        .with_optional_attendees([PERSON_C]);

    let result = query_detailed(&events, &request);

    assert_eq!(result.honored, Honored::Everyone);
    assert_eq!(
        result.slots,
        vec![
            range(START_OF_DAY, at(8, 0)),
            range(at(8, 30), at(9, 0)),
            range(at(10, 0), at(12, 0)),
        ]
    );
}

#[test]
fn optional_attendee_busy_all_day_is_dropped() {
    let events = vec![
        event(at(8, 0), at(8, 30), &[PERSON_A]),
        event(at(9, 0), at(10, 0), &[PERSON_B]),
        event(START_OF_DAY, END_OF_DAY, &[PERSON_C]),
    ];
    let request = MeetingRequest::new([PERSON_A, PERSON_B], DURATION_30_MINUTES)
        .with_optional_attendees([PERSON_C]);

    let result = query_detailed(&events, &request);

    assert_eq!(result.honored, Honored::RequiredOnly);
    assert_eq!(
        result.slots,
        vec![
            range(START_OF_DAY, at(8, 0)),
            range(at(8, 30), at(9, 0)),
            range(at(10, 0), END_OF_DAY),
        ]
    );
}

#[test]
fn optional_attendee_fallback_keeps_single_required_slot() {
    // Required attendee is only free 10:00-11:00; the optional one is busy then.
    let events = vec![
        event(START_OF_DAY, 600, &[PERSON_A]),
        event(660, END_OF_DAY, &[PERSON_A]),
        event(600, 660, &[PERSON_C]),
    ];
    let request =
        MeetingRequest::new([PERSON_A], DURATION_60_MINUTES).with_optional_attendees([PERSON_C]);

    assert_eq!(query(&events, &request), vec![range(600, 660)]);
}

#[test]
fn optional_attendee_shrinking_gap_below_duration_is_dropped() {
    // Required gap 08:30-09:30 fits 60 minutes; C's 08:30-09:00 meeting would
    // leave only 30, so C is dropped as a whole.
    let events = vec![
        event(START_OF_DAY, at(8, 30), &[PERSON_A]),
        event(at(9, 30), END_OF_DAY, &[PERSON_A]),
        event(at(8, 30), at(9, 0), &[PERSON_C]),
    ];
    let request =
        MeetingRequest::new([PERSON_A], DURATION_60_MINUTES).with_optional_attendees([PERSON_C]);

    assert_eq!(query(&events, &request), vec![range(at(8, 30), at(9, 30))]);
}

#[test]
fn only_optional_attendees_with_gaps() {
    let events = vec![
        event(at(8, 0), at(10, 0), &[PERSON_A]),
        event(at(9, 0), at(11, 0), &[PERSON_B]),
    ];
    let request = MeetingRequest::new(Vec::<String>::new(), DURATION_90_MINUTES)
        .with_optional_attendees([PERSON_A, PERSON_B]);

    let result = query_detailed(&events, &request);

    assert_eq!(result.honored, Honored::Everyone);
    assert_eq!(
        result.slots,
        vec![range(START_OF_DAY, at(8, 0)), range(at(11, 0), END_OF_DAY)]
    );
}

#[test]
fn only_optional_attendees_without_gaps_frees_whole_day() {
    let events = vec![
        event(START_OF_DAY, at(12, 0), &[PERSON_A]),
        event(at(12, 0), END_OF_DAY, &[PERSON_B]),
    ];
    let request = MeetingRequest::new(Vec::<String>::new(), DURATION_2_HOUR)
        .with_optional_attendees([PERSON_A, PERSON_B]);

    let result = query_detailed(&events, &request);

    assert_eq!(result.honored, Honored::RequiredOnly);
    assert_eq!(result.slots, vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn no_optional_attendees_never_reports_fallback() {
    let events = vec![event(START_OF_DAY, END_OF_DAY, &[PERSON_A])];
    let request = MeetingRequest::new([PERSON_A], DURATION_30_MINUTES);

    let result = query_detailed(&events, &request);

    assert_eq!(result.honored, Honored::Everyone);
    assert!(result.slots.is_empty());
}

// ── free_slots / find_first_slot ────────────────────────────────────────────

#[test]
fn free_slots_filters_by_attendee_set() {
    let events = vec![
        event(at(8, 0), at(9, 0), &[PERSON_A]),
        event(at(10, 0), at(11, 0), &[PERSON_B]),
    ];
    let only_b: HashSet<&str> = [PERSON_B].into_iter().collect();

    assert_eq!(
        free_slots(&events, &only_b, DURATION_30_MINUTES),
        vec![range(START_OF_DAY, at(10, 0)), range(at(11, 0), END_OF_DAY)]
    );
}

#[test]
fn find_first_slot_returns_earliest() {
    let events = vec![event(START_OF_DAY, at(9, 0), &[PERSON_A])];
    let request = MeetingRequest::new([PERSON_A], DURATION_1_HOUR);

    assert_eq!(
        find_first_slot(&events, &request),
        Some(range(at(9, 0), END_OF_DAY))
    );

    let busy = vec![event(START_OF_DAY, END_OF_DAY, &[PERSON_A])];
    assert_eq!(find_first_slot(&busy, &request), None);
}
