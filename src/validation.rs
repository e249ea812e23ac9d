//! Boundary checks run before a conflict graph is built.
//!
//! Every offending record is reported, not just the first one.

use crate::data::SchedulingInput;
use crate::rooms::RoomPool;
use std::collections::HashSet;
use std::fmt;

/// Exclusive upper bound for `SlotConfig::end_hour`.
const LAST_HOUR: u32 = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NonPositiveDuration { course_id: String },
    UnknownRoomType { course_id: String, room_type: String },
    DuplicateCourseId { course_id: String },
    DuplicateRoomId { room_id: String },
    DuplicateDay { day: String },
    EmptySlotUniverse,
    HourOutOfRange { end_hour: u32 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveDuration { course_id } => {
                write!(f, "course {course_id} has a non-positive duration")
            }
            Self::UnknownRoomType {
                course_id,
                room_type,
            } => write!(
                f,
                "course {course_id} needs room type '{room_type}' but no room of that type exists"
            ),
            Self::DuplicateCourseId { course_id } => write!(f, "duplicate course id {course_id}"),
            Self::DuplicateRoomId { room_id } => write!(f, "duplicate room id {room_id}"),
            Self::DuplicateDay { day } => write!(f, "day {day} is listed more than once"),
            Self::EmptySlotUniverse => {
                write!(f, "slot configuration yields no time slots")
            }
            Self::HourOutOfRange { end_hour } => {
                write!(f, "end hour {end_hour} is past the end of the day ({LAST_HOUR})")
            }
        }
    }
}

/// All validation failures for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveError {
    pub errors: Vec<ValidationError>,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid scheduling input: ")?;
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SolveError {}

pub fn validate_input(input: &SchedulingInput) -> Result<(), SolveError> {
    let mut errors = Vec::new();

    let slots = &input.slots;
    if slots.days.is_empty() || slots.end_hour <= slots.start_hour {
        errors.push(ValidationError::EmptySlotUniverse);
    }
    if slots.end_hour > LAST_HOUR {
        errors.push(ValidationError::HourOutOfRange {
            end_hour: slots.end_hour,
        });
    }
    let mut days = HashSet::new();
    for day in &slots.days {
        if !days.insert(day.as_str()) {
            errors.push(ValidationError::DuplicateDay { day: day.clone() });
        }
    }

    let mut room_ids = HashSet::new();
    for room in &input.rooms {
        if !room_ids.insert(room.room_id.as_str()) {
            errors.push(ValidationError::DuplicateRoomId {
                room_id: room.room_id.clone(),
            });
        }
    }

    let pool = RoomPool::new(&input.rooms);
    let mut course_ids = HashSet::new();
    for course in &input.courses {
        if !course_ids.insert(course.course_id.as_str()) {
            errors.push(ValidationError::DuplicateCourseId {
                course_id: course.course_id.clone(),
            });
        }
        if course.duration <= 0 {
            errors.push(ValidationError::NonPositiveDuration {
                course_id: course.course_id.clone(),
            });
        }
        if input.options.reject_unknown_room_types && !pool.has_type(&course.room_type) {
            errors.push(ValidationError::UnknownRoomType {
                course_id: course.course_id.clone(),
                room_type: course.room_type.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SolveError { errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Room, SlotConfig};
    use crate::graph::tests::course;

    #[test]
    fn well_formed_input_passes() {
        let input = SchedulingInput::new(vec![
            course("c1", "g1", "t1", 2, "lecture"),
            course("c2", "g1", "t2", 1, "lab"),
        ]);

        assert_eq!(validate_input(&input), Ok(()));
    }

    #[test]
    fn empty_course_list_is_valid() {
        assert_eq!(validate_input(&SchedulingInput::new(Vec::new())), Ok(()));
    }

    #[test]
    fn reports_every_malformed_course() {
        let input = SchedulingInput::new(vec![
            course("c1", "g1", "t1", 0, "lecture"),
            course("c2", "g1", "t1", 1, "gym"),
            course("c1", "g2", "t2", 1, "lab"),
        ]);

        let err = validate_input(&input).unwrap_err();
        assert_eq!(
            err.errors,
            vec![
                ValidationError::NonPositiveDuration {
                    course_id: "c1".into()
                },
                ValidationError::UnknownRoomType {
                    course_id: "c2".into(),
                    room_type: "gym".into()
                },
                ValidationError::DuplicateCourseId {
                    course_id: "c1".into()
                },
            ]
        );
        assert!(err.to_string().contains("no room of that type"));
    }

    #[test]
    fn unknown_room_type_allowed_when_not_rejecting() {
        let mut input = SchedulingInput::new(vec![course("c1", "g1", "t1", 1, "gym")]);
        input.options.reject_unknown_room_types = false;

        assert_eq!(validate_input(&input), Ok(()));
    }

    #[test]
    fn rejects_bad_rooms_and_slot_config() {
        let mut input = SchedulingInput::new(Vec::new());
        input.rooms = vec![Room::new("A", "lab"), Room::new("A", "lecture")];
        input.slots = SlotConfig {
            days: vec!["Mon".into(), "Mon".into()],
            start_hour: 12,
            end_hour: 12,
        };

        let err = validate_input(&input).unwrap_err();
        assert_eq!(
            err.errors,
            vec![
                ValidationError::EmptySlotUniverse,
                ValidationError::DuplicateDay { day: "Mon".into() },
                ValidationError::DuplicateRoomId {
                    room_id: "A".into()
                },
            ]
        );
    }

    #[test]
    fn rejects_hours_past_midnight() {
        let mut input = SchedulingInput::new(Vec::new());
        input.slots = SlotConfig {
            days: vec!["Mon".into()],
            start_hour: 20,
            end_hour: 30,
        };

        let err = validate_input(&input).unwrap_err();
        assert_eq!(
            err.errors,
            vec![ValidationError::HourOutOfRange { end_hour: 30 }]
        );
        assert!(err.to_string().contains("end hour 30"));
    }

    #[test]
    fn huge_hour_range_is_rejected_before_generation() {
        let mut input = SchedulingInput::new(vec![course("c1", "g1", "t1", 1, "lecture")]);
        input.slots = SlotConfig {
            days: vec!["Mon".into(), "Tue".into()],
            start_hour: 0,
            end_hour: 2_000_000_000,
        };

        assert!(validate_input(&input).is_err());
        assert!(crate::solver::solve(&input).is_err());
    }

    #[test]
    fn whole_day_is_accepted() {
        let mut input = SchedulingInput::new(vec![course("c1", "g1", "t1", 1, "lecture")]);
        input.slots = SlotConfig {
            days: vec!["Sat".into()],
            start_hour: 0,
            end_hour: 24,
        };

        assert_eq!(validate_input(&input), Ok(()));
    }

    #[test]
    fn negative_duration_is_reported_against_its_course() {
        let input = SchedulingInput::new(vec![course("c7", "g1", "t1", -2, "lecture")]);

        let err = validate_input(&input).unwrap_err();
        assert_eq!(
            err.errors,
            vec![ValidationError::NonPositiveDuration {
                course_id: "c7".into()
            }]
        );
    }
}
