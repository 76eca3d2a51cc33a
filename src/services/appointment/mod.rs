//! Appointment store and the drag-reflow pass.
//!
//! `AppointmentBook` owns the in-memory appointment collection. The grid
//! mutates it through a small set of operations: slot lookup, add/remove,
//! resize, and `reflow`, the placement recomputation that runs when a drag
//! gesture lands on a destination cell.

use chrono::{NaiveDate, NaiveTime};

use crate::models::appointment::{Appointment, AppointmentId};
use crate::services::timegrid;

/// Address of one grid cell: `(date, cabin, start slot)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotRef {
    pub date: NaiveDate,
    pub cabin_id: u32,
    pub time: NaiveTime,
}

impl SlotRef {
    pub fn new(date: NaiveDate, cabin_id: u32, time: NaiveTime) -> Self {
        Self {
            date,
            cabin_id,
            time,
        }
    }
}

/// Outcome of a reflow attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflowOutcome {
    /// The appointment was moved (possibly shifted off the drop slot).
    Committed,
    /// Every start in the destination cabin/day was taken; nothing changed.
    FullyBooked,
    /// The source index did not address an appointment; nothing changed.
    BadSource,
}

/// In-memory, ordered appointment collection.
///
/// Kept sorted by `(date, start)` ascending; `reflow` re-establishes the
/// ordering after every committed move.
#[derive(Debug, Default, Clone)]
pub struct AppointmentBook {
    appointments: Vec<Appointment>,
}

impl AppointmentBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_appointments(mut appointments: Vec<Appointment>) -> Self {
        appointments.sort_by(|a, b| (a.date, a.start).cmp(&(b.date, b.start)));
        Self { appointments }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Appointment> {
        self.appointments.iter()
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Appointments whose `(date, cabin, start)` equals the cell key.
    pub fn at_slot(&self, slot: &SlotRef) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.date == slot.date && a.cabin_id == slot.cabin_id && a.start == slot.time)
            .collect()
    }

    pub fn get(&self, id: &AppointmentId) -> Option<&Appointment> {
        self.appointments.iter().find(|a| &a.id == id)
    }

    pub fn position_of(&self, id: &AppointmentId) -> Option<usize> {
        self.appointments.iter().position(|a| &a.id == id)
    }

    pub fn add(&mut self, appointment: Appointment) {
        self.appointments.push(appointment);
        self.sort();
    }

    pub fn remove(&mut self, id: &AppointmentId) -> Option<Appointment> {
        let index = self.position_of(id)?;
        Some(self.appointments.remove(index))
    }

    /// Remove every appointment occupying the given slot, as the dialog's
    /// delete action does. Returns the number removed.
    pub fn remove_at(&mut self, slot: &SlotRef) -> usize {
        let before = self.appointments.len();
        self.appointments
            .retain(|a| !(a.date == slot.date && a.cabin_id == slot.cabin_id && a.start == slot.time));
        before - self.appointments.len()
    }

    /// Replace an appointment's duration.
    ///
    /// Deliberately performs no day-end clamp and no collision pass; only
    /// the drag-reflow path does. Returns false when the id is unknown.
    pub fn resize(&mut self, id: &AppointmentId, new_duration_slots: u32) -> bool {
        match self.appointments.iter_mut().find(|a| &a.id == id) {
            Some(appointment) => {
                appointment.duration_slots = new_duration_slots;
                true
            }
            None => {
                log::debug!("Resize ignored, unknown appointment id {}", id);
                false
            }
        }
    }

    /// Recompute placement after a completed drag gesture.
    ///
    /// Relocates the appointment at `source` to the destination cell,
    /// clamps its duration to the remaining day, shifts the start forward in
    /// 15-minute steps past any occupied slot, then commits and re-sorts.
    /// The shift scan is bounded by end of day: a fully booked cabin aborts
    /// the move and leaves the collection unchanged.
    pub fn reflow(&mut self, source: usize, dest: SlotRef) -> ReflowOutcome {
        if source >= self.appointments.len() {
            return ReflowOutcome::BadSource;
        }

        let mut moved = self.appointments[source].clone();
        moved.date = dest.date;
        moved.cabin_id = dest.cabin_id;
        moved.start = dest.time;

        // Shrink to whatever still fits before 23:59:59 of the destination day
        moved.duration_slots =
            timegrid::clamp_duration_to_day(moved.start, moved.duration_slots);

        // Find the first free start at or after the drop slot
        let Some(start) = self.free_start_from(&moved, source) else {
            log::debug!(
                "Reflow aborted, cabin {} fully booked on {}",
                dest.cabin_id,
                dest.date
            );
            return ReflowOutcome::FullyBooked;
        };
        moved.start = start;
        // A later landing slot leaves less of the day; clamp again
        moved.duration_slots =
            timegrid::clamp_duration_to_day(moved.start, moved.duration_slots);

        self.appointments.remove(source);
        self.appointments.push(moved);
        self.sort();
        ReflowOutcome::Committed
    }

    /// First start time at or after `moved.start` whose `(date, cabin,
    /// start)` triple is unoccupied, excluding the appointment being moved.
    /// `None` once the candidate would no longer fit a single slot before
    /// day end.
    fn free_start_from(&self, moved: &Appointment, source: usize) -> Option<NaiveTime> {
        let mut candidate = moved.start;
        loop {
            if timegrid::slots_until_day_end(candidate) == 0 {
                return None;
            }

            let taken = self.appointments.iter().enumerate().any(|(i, a)| {
                i != source
                    && a.date == moved.date
                    && a.cabin_id == moved.cabin_id
                    && a.start == candidate
            });
            if !taken {
                return Some(candidate);
            }

            candidate = timegrid::next_slot(candidate)?;
        }
    }

    fn sort(&mut self) {
        self.appointments
            .sort_by(|a, b| (a.date, a.start).cmp(&(b.date, b.start)));
    }

    /// Seed bookings shown on first launch.
    pub fn seed() -> Self {
        let date = NaiveDate::from_ymd_opt(2025, 2, 24).unwrap();
        let mut first = Appointment::new(
            "nadia anachad",
            "Verju Amincissement",
            date,
            9,
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            4,
            "#10b981",
        )
        .expect("seed appointment is valid");
        first.completed = true;

        let second = Appointment::new(
            "Maria Garcia",
            "Masaje",
            date,
            3,
            NaiveTime::from_hms_opt(11, 30, 0).unwrap(),
            2,
            "#9333ea",
        )
        .expect("seed appointment is valid");

        Self::from_appointments(vec![first, second])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 24).unwrap()
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn appointment(name: &str, cabin_id: u32, start: NaiveTime, duration: u32) -> Appointment {
        Appointment::new(name, "Masaje", date(), cabin_id, start, duration, "#9333ea").unwrap()
    }

    fn book(entries: Vec<Appointment>) -> AppointmentBook {
        AppointmentBook::from_appointments(entries)
    }

    #[test]
    fn test_at_slot_matches_exact_triple() {
        let book = book(vec![
            appointment("a", 1, t(10, 0), 2),
            appointment("b", 2, t(10, 0), 2),
            appointment("c", 1, t(10, 15), 2),
        ]);

        let slot = SlotRef::new(date(), 1, t(10, 0));
        let found = book.at_slot(&slot);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].client_name, "a");
    }

    #[test]
    fn test_remove_at_slot() {
        let mut book = book(vec![
            appointment("a", 1, t(10, 0), 2),
            appointment("b", 1, t(10, 15), 2),
        ]);
        let removed = book.remove_at(&SlotRef::new(date(), 1, t(10, 0)));
        assert_eq!(removed, 1);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_resize_replaces_duration_without_clamp() {
        // 17:30 in a clinic closing at 18:00: a plain resize is NOT clamped,
        // only the drag path is
        let mut book = book(vec![appointment("a", 1, t(17, 30), 2)]);
        let id = book.iter().next().unwrap().id.clone();

        assert!(book.resize(&id, 8));
        assert_eq!(book.get(&id).unwrap().duration_slots, 8);
    }

    #[test]
    fn test_resize_unknown_id_is_noop() {
        let mut book = book(vec![appointment("a", 1, t(10, 0), 2)]);
        assert!(!book.resize(&AppointmentId::from("missing"), 4));
        assert_eq!(book.iter().next().unwrap().duration_slots, 2);
    }

    #[test]
    fn test_reflow_moves_to_free_slot() {
        let mut book = book(vec![appointment("a", 1, t(11, 30), 2)]);

        let outcome = book.reflow(0, SlotRef::new(date(), 2, t(9, 0)));
        assert_eq!(outcome, ReflowOutcome::Committed);

        let moved = book.iter().next().unwrap();
        assert_eq!(moved.cabin_id, 2);
        assert_eq!(moved.start, t(9, 0));
        assert_eq!(moved.duration_slots, 2);
    }

    #[test]
    fn test_reflow_collision_advances_to_next_free_slot() {
        // occupied 10:00 in cabin "sp": the moved appointment lands on 10:15
        let blocker = appointment("blocker", 3, t(10, 0), 2);
        let moving = appointment("moving", 3, t(11, 30), 2);
        let moving_id = moving.id.clone();
        let mut book = book(vec![blocker, moving]);

        let source = book.position_of(&moving_id).unwrap();
        let outcome = book.reflow(source, SlotRef::new(date(), 3, t(10, 0)));
        assert_eq!(outcome, ReflowOutcome::Committed);

        assert_eq!(book.get(&moving_id).unwrap().start, t(10, 15));
    }

    #[test]
    fn test_reflow_collision_skips_run_of_taken_slots() {
        let mut entries = vec![
            appointment("b0", 3, t(10, 0), 1),
            appointment("b1", 3, t(10, 15), 1),
            appointment("b2", 3, t(10, 30), 1),
        ];
        let moving = appointment("moving", 3, t(12, 0), 2);
        let moving_id = moving.id.clone();
        entries.push(moving);
        let mut book = book(entries);

        let source = book.position_of(&moving_id).unwrap();
        assert_eq!(
            book.reflow(source, SlotRef::new(date(), 3, t(10, 0))),
            ReflowOutcome::Committed
        );
        assert_eq!(book.get(&moving_id).unwrap().start, t(10, 45));
    }

    #[test]
    fn test_reflow_clamps_duration_at_day_end() {
        let moving = appointment("moving", 1, t(10, 0), 8);
        let moving_id = moving.id.clone();
        let mut book = book(vec![moving]);

        let source = book.position_of(&moving_id).unwrap();
        book.reflow(source, SlotRef::new(date(), 1, t(23, 30)));

        let moved = book.get(&moving_id).unwrap();
        assert_eq!(moved.start, t(23, 30));
        // only one whole slot fits before 23:59:59
        assert_eq!(moved.duration_slots, 1);
    }

    #[test]
    fn test_reflow_never_leaves_collision() {
        let mut entries: Vec<Appointment> = (0..4)
            .map(|i| appointment(&format!("b{i}"), 1, t(10, i * 15), 1))
            .collect();
        let moving = appointment("moving", 1, t(14, 0), 2);
        let moving_id = moving.id.clone();
        entries.push(moving);
        let mut book = book(entries);

        let source = book.position_of(&moving_id).unwrap();
        book.reflow(source, SlotRef::new(date(), 1, t(10, 0)));

        let mut triples: Vec<_> = book
            .iter()
            .map(|a| (a.date, a.cabin_id, a.start))
            .collect();
        let total = triples.len();
        triples.sort();
        triples.dedup();
        assert_eq!(triples.len(), total);
    }

    #[test]
    fn test_reflow_fully_booked_day_is_noop() {
        // every start from 23:30 on is taken and nothing earlier is free:
        // use a one-slot tail window by blocking 23:30 and 23:45
        let blocker = appointment("b", 1, t(23, 30), 1);
        let moving = appointment("moving", 2, t(10, 0), 2);
        let moving_id = moving.id.clone();
        let mut book = book(vec![blocker, moving]);
        let snapshot: Vec<_> = book.iter().cloned().collect();

        let source = book.position_of(&moving_id).unwrap();
        let outcome = book.reflow(source, SlotRef::new(date(), 1, t(23, 30)));

        assert_eq!(outcome, ReflowOutcome::FullyBooked);
        assert_eq!(book.iter().cloned().collect::<Vec<_>>(), snapshot);
    }

    #[test]
    fn test_reflow_bad_source_is_noop() {
        let mut book = book(vec![appointment("a", 1, t(10, 0), 2)]);
        assert_eq!(
            book.reflow(7, SlotRef::new(date(), 1, t(11, 0))),
            ReflowOutcome::BadSource
        );
    }

    #[test]
    fn test_reflow_resorts_by_date_then_start() {
        let other_day = NaiveDate::from_ymd_opt(2025, 2, 25).unwrap();
        let mut early = appointment("early", 1, t(9, 0), 1);
        early.date = other_day;
        let moving = appointment("moving", 1, t(16, 0), 1);
        let moving_id = moving.id.clone();
        let mut book = book(vec![early, appointment("mid", 1, t(12, 0), 1), moving]);

        let source = book.position_of(&moving_id).unwrap();
        book.reflow(source, SlotRef::new(date(), 1, t(8, 0)));

        let keys: Vec<_> = book.iter().map(|a| (a.date, a.start)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(book.iter().next().unwrap().id, moving_id);
    }

    #[test]
    fn test_seed_is_sorted() {
        let book = AppointmentBook::seed();
        assert_eq!(book.len(), 2);
        let keys: Vec<_> = book.iter().map(|a| (a.date, a.start)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}
