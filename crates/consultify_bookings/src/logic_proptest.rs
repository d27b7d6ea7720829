#[cfg(test)]
mod tests {
    use crate::logic::{generate_time_slots, SchedulingWindow};
    use chrono::{Datelike, NaiveDate, TimeZone, Timelike, Utc, Weekday};
    use proptest::prelude::*;
    use std::collections::HashSet;

    // Strategy for an arbitrary calendar date within a ten-year range
    fn arb_date() -> impl Strategy<Value = NaiveDate> {
        (2024i32..2034, 1u32..=365).prop_map(|(year, ordinal)| {
            NaiveDate::from_yo_opt(year, ordinal)
                .unwrap_or_else(|| NaiveDate::from_yo_opt(year, 1).unwrap())
        })
    }

    fn is_working_day(day: NaiveDate) -> bool {
        !matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
    }

    proptest! {
        // The default grid always holds exactly 16 slots spanning 09:00-17:00
        // with no gaps, no overlaps, and unique identifiers.
        #[test]
        fn grid_shape_is_invariant(day in arb_date()) {
            let now = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
            let slots = generate_time_slots(day, now, &HashSet::new(), &SchedulingWindow::default());

            if !is_working_day(day) {
                prop_assert!(slots.is_empty());
                return Ok(());
            }

            prop_assert_eq!(slots.len(), 16);
            prop_assert_eq!(slots[0].start_time.hour(), 9);
            prop_assert_eq!(slots[15].end_time.hour(), 17);

            let mut seen = HashSet::new();
            for slot in &slots {
                prop_assert_eq!(slot.end_time - slot.start_time, chrono::Duration::minutes(30));
                prop_assert!(seen.insert(slot.id.clone()), "duplicate slot id {}", slot.id);
            }
            for window in slots.windows(2) {
                prop_assert_eq!(window[0].end_time, window[1].start_time);
            }
        }

        // A slot that starts before "now" is never marked available,
        // regardless of the booked set.
        #[test]
        fn past_slots_are_never_available(
            day in arb_date(),
            now_hour in 0u32..24,
            now_minute in prop::sample::select(vec![0u32, 15, 30, 45]),
        ) {
            let now = Utc.from_utc_datetime(
                &day.and_hms_opt(now_hour, now_minute, 0).unwrap(),
            );
            let slots = generate_time_slots(day, now, &HashSet::new(), &SchedulingWindow::default());

            for slot in &slots {
                if slot.start_time < now {
                    prop_assert!(!slot.available, "past slot {} marked available", slot.id);
                } else {
                    prop_assert!(slot.available);
                }
            }
        }

        // A booked identifier is never available, and booking one slot does
        // not affect any other slot.
        #[test]
        fn booked_ids_are_never_available(day in arb_date(), booked_index in 0usize..16) {
            let now = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
            let window = SchedulingWindow::default();
            let grid = generate_time_slots(day, now, &HashSet::new(), &window);
            prop_assume!(!grid.is_empty());

            let booked: HashSet<String> = [grid[booked_index].id.clone()].into_iter().collect();
            let slots = generate_time_slots(day, now, &booked, &window);

            for (index, slot) in slots.iter().enumerate() {
                prop_assert_eq!(slot.available, index != booked_index, "slot {}", &slot.id);
            }
        }
    }
}
