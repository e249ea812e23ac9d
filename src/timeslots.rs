use crate::data::{SlotConfig, TimeSlot};
use std::ops::Range;

/// The ordered universe of slots for one run: days in configured order, hours
/// ascending within each day.
///
/// Slots are addressed by their position in the universe. Two neighbouring
/// positions are contiguous only when they fall on the same day.
#[derive(Debug, Clone)]
pub struct SlotUniverse {
    slots: Vec<TimeSlot>,
    day_index: Vec<usize>,
}

impl SlotUniverse {
    pub fn generate(config: &SlotConfig) -> Self {
        let hours = config.start_hour..config.end_hour.max(config.start_hour);
        let mut slots = Vec::with_capacity(config.days.len() * hours.len());
        let mut day_index = Vec::with_capacity(slots.capacity());

        for (d, day) in config.days.iter().enumerate() {
            for hour in hours.clone() {
                slots.push(TimeSlot::new(day.clone(), hour));
                day_index.push(d);
            }
        }

        Self { slots, day_index }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn slot(&self, idx: usize) -> &TimeSlot {
        &self.slots[idx]
    }

    /// The `duration` consecutive slots starting at `start`, or `None` when
    /// the run would leave the day or the universe.
    pub fn window(&self, start: usize, duration: usize) -> Option<Range<usize>> {
        if duration == 0 {
            return None;
        }
        let end = start.checked_add(duration)?;
        if end > self.slots.len() {
            return None;
        }
        // hours are generated without gaps, so same day means contiguous
        if self.day_index[start] != self.day_index[end - 1] {
            return None;
        }
        Some(start..end)
    }

    pub fn resolve(&self, window: Range<usize>) -> Vec<TimeSlot> {
        self.slots[window].to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_days() -> SlotUniverse {
        SlotUniverse::generate(&SlotConfig {
            days: vec!["Mon".into(), "Tue".into()],
            start_hour: 9,
            end_hour: 12,
        })
    }

    #[test]
    fn default_week_has_45_slots_in_order() {
        let universe = SlotUniverse::generate(&SlotConfig::default());

        assert_eq!(universe.len(), 45);
        assert_eq!(universe.slot(0), &TimeSlot::new("Mon", 9));
        assert_eq!(universe.slot(8), &TimeSlot::new("Mon", 17));
        assert_eq!(universe.slot(9), &TimeSlot::new("Tue", 9));
        assert_eq!(universe.slot(44), &TimeSlot::new("Fri", 17));
    }

    #[test]
    fn window_stays_inside_a_day() {
        let universe = two_days();

        assert_eq!(universe.window(0, 3), Some(0..3));
        assert_eq!(universe.window(1, 3), None);
        assert_eq!(universe.window(2, 2), None);
        assert_eq!(universe.window(3, 3), Some(3..6));
    }

    #[test]
    fn window_rejects_end_of_universe_and_zero_length() {
        let universe = two_days();

        assert_eq!(universe.window(5, 1), Some(5..6));
        assert_eq!(universe.window(5, 2), None);
        assert_eq!(universe.window(6, 1), None);
        assert_eq!(universe.window(0, 0), None);
    }

    #[test]
    fn inverted_hours_produce_empty_universe() {
        let universe = SlotUniverse::generate(&SlotConfig {
            days: vec!["Mon".into()],
            start_hour: 17,
            end_hour: 9,
        });

        assert_eq!(universe.len(), 0);
    }

    #[test]
    fn resolve_maps_positions_to_slots() {
        let universe = two_days();

        assert_eq!(
            universe.resolve(3..5),
            vec![TimeSlot::new("Tue", 9), TimeSlot::new("Tue", 10)]
        );
    }
}
