//! Timetable view of a finished schedule: one row per slot of the universe,
//! optionally narrowed to a single group or teacher.

use crate::data::{Assignment, CalendarEntry, CalendarRequest, CalendarRow, TimeSlot};
use crate::solver;
use crate::timeslots::SlotUniverse;
use crate::validation::SolveError;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarFilter<'a> {
    All,
    Group(&'a str),
    Teacher(&'a str),
}

impl CalendarFilter<'_> {
    fn matches(&self, assignment: &Assignment) -> bool {
        match self {
            Self::All => true,
            Self::Group(group) => assignment.group == *group,
            Self::Teacher(teacher) => assignment.teacher == *teacher,
        }
    }
}

impl CalendarRequest {
    pub fn filter(&self) -> CalendarFilter<'_> {
        match (&self.group, &self.teacher) {
            (Some(group), _) => CalendarFilter::Group(group),
            (None, Some(teacher)) => CalendarFilter::Teacher(teacher),
            (None, None) => CalendarFilter::All,
        }
    }
}

/// Schedules the request and lays the result out slot by slot.
pub fn calendar(request: &CalendarRequest) -> Result<Vec<CalendarRow>, SolveError> {
    let output = solver::solve(&request.input)?;
    let universe = SlotUniverse::generate(&request.input.slots);
    Ok(calendar_grid(&universe, &output.assignments, request.filter()))
}

pub fn calendar_grid(
    universe: &SlotUniverse,
    assignments: &[Assignment],
    filter: CalendarFilter<'_>,
) -> Vec<CalendarRow> {
    let position: HashMap<&TimeSlot, usize> = universe
        .slots()
        .iter()
        .enumerate()
        .map(|(i, s)| (s, i))
        .collect();
    let mut rows: Vec<CalendarRow> = universe
        .slots()
        .iter()
        .map(|slot| CalendarRow {
            slot: slot.clone(),
            entries: Vec::new(),
        })
        .collect();

    for assignment in assignments.iter().filter(|a| filter.matches(a)) {
        let Some(room) = &assignment.room else {
            continue;
        };
        for slot in &assignment.assigned_slots {
            if let Some(&i) = position.get(slot) {
                rows[i].entries.push(CalendarEntry {
                    course_id: assignment.course_id.clone(),
                    course: assignment.course.clone(),
                    room: room.clone(),
                });
            }
        }
    }

    rows
}
