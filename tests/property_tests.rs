// Property-based tests for the time grid and the drag-reflow pass

use chrono::{NaiveDate, NaiveTime, Timelike};
use proptest::prelude::*;

use clinic_agenda::models::appointment::Appointment;
use clinic_agenda::services::appointment::{AppointmentBook, ReflowOutcome, SlotRef};
use clinic_agenda::services::timegrid::{self, SLOT_MINUTES};

fn label(hour: u32, quarter: u32) -> String {
    format!("{:02}:{:02}", hour, quarter * 15)
}

fn appointment(name: &str, cabin_id: u32, start: NaiveTime, duration: u32) -> Appointment {
    Appointment::new(
        name,
        "Masaje",
        NaiveDate::from_ymd_opt(2025, 2, 24).unwrap(),
        cabin_id,
        start,
        duration,
        "#9333ea",
    )
    .unwrap()
}

proptest! {
    /// Property: for any open < close on the quarter-hour grid the slot
    /// sequence is strictly increasing, starts at open and never passes close
    #[test]
    fn prop_slot_sequence_is_strictly_increasing(
        open_hour in 0..23u32,
        open_quarter in 0..4u32,
        extra_slots in 1..40u32,
    ) {
        let open = label(open_hour, open_quarter);
        let open_minutes = open_hour * 60 + open_quarter * 15;
        let close_minutes = (open_minutes + extra_slots * 15).min(23 * 60 + 45);
        let close = format!("{:02}:{:02}", close_minutes / 60, close_minutes % 60);

        let slots = timegrid::time_slots(&open, &close);

        prop_assert!(!slots.is_empty());
        prop_assert_eq!(timegrid::slot_label(slots[0]), open);
        for pair in slots.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        let close_time = timegrid::parse_label(&close).unwrap();
        prop_assert!(*slots.last().unwrap() <= close_time);
        // equally spaced at the fixed step
        prop_assert_eq!(
            slots.len() as u32,
            (close_minutes - open_minutes) / SLOT_MINUTES as u32 + 1
        );
    }

    /// Property: inverted bounds never loop, they yield an empty sequence
    #[test]
    fn prop_inverted_bounds_yield_empty(
        open_hour in 12..23u32,
        close_hour in 0..12u32,
    ) {
        let slots = timegrid::time_slots(&label(open_hour, 0), &label(close_hour, 0));
        prop_assert!(slots.is_empty());
    }

    /// Property: after any committed reflow the moved appointment's
    /// (date, cabin, start) triple collides with no other appointment,
    /// its end fits the day, and the collection is sorted
    #[test]
    fn prop_reflow_resolves_collisions_and_sorts(
        occupied in proptest::collection::vec((1..3u32, 8..20u32, 0..4u32), 0..12),
        dest_cabin in 1..3u32,
        dest_hour in 8..20u32,
        dest_quarter in 0..4u32,
        duration in 1..8u32,
    ) {
        let mut entries: Vec<Appointment> = occupied
            .iter()
            .enumerate()
            .map(|(i, (cabin, hour, quarter))| {
                appointment(
                    &format!("blocker {i}"),
                    *cabin,
                    NaiveTime::from_hms_opt(*hour, quarter * 15, 0).unwrap(),
                    1,
                )
            })
            .collect();

        let moving = appointment(
            "moving",
            1,
            NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            duration,
        );
        let moving_id = moving.id.clone();
        entries.push(moving);

        let mut book = AppointmentBook::from_appointments(entries);
        let source = book.position_of(&moving_id).unwrap();
        let dest = SlotRef::new(
            NaiveDate::from_ymd_opt(2025, 2, 24).unwrap(),
            dest_cabin,
            NaiveTime::from_hms_opt(dest_hour, dest_quarter * 15, 0).unwrap(),
        );

        let outcome = book.reflow(source, dest);
        prop_assert_eq!(outcome, ReflowOutcome::Committed);

        let moved = book.get(&moving_id).unwrap();

        // no other appointment shares the moved triple
        let collisions = book
            .iter()
            .filter(|a| {
                a.id != moved.id
                    && a.date == moved.date
                    && a.cabin_id == moved.cabin_id
                    && a.start == moved.start
            })
            .count();
        prop_assert_eq!(collisions, 0);

        // the landing slot is at or after the drop slot
        prop_assert!(moved.start >= dest.time);

        // end of appointment fits before 23:59:59
        let end_minutes = moved.start.num_seconds_from_midnight() as i64 / 60
            + moved.duration_slots as i64 * SLOT_MINUTES;
        prop_assert!(end_minutes <= 24 * 60 - 1);

        // global ordering by (date, start)
        let keys: Vec<_> = book.iter().map(|a| (a.date, a.start)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys, sorted);
    }
}
