use serde::{Deserialize, Serialize};
use std::fmt;

// Type aliases for clarity
pub type CourseId = String;
pub type RoomId = String;

/// A schedulable unit: one course taught by one teacher to one group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub course_id: CourseId,
    pub course: String,
    pub group: String,
    pub teacher: String,
    /// Number of consecutive slots the course needs; must be positive.
    pub duration: i64,
    pub room_type: String,
}

/// A physical room of a given type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub room_id: RoomId,
    pub room_type: String,
}

impl Room {
    pub fn new(room_id: impl Into<RoomId>, room_type: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            room_type: room_type.into(),
        }
    }
}

/// One hour on one day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct TimeSlot {
    pub day: String,
    pub hour: u32,
}

impl TimeSlot {
    pub fn new(day: impl Into<String>, hour: u32) -> Self {
        Self {
            day: day.into(),
            hour,
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.day, self.hour)
    }
}

/// Days and the half-open hour range `[start_hour, end_hour)` that make up
/// the slot universe.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotConfig {
    pub days: Vec<String>,
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            days: ["Mon", "Tue", "Wed", "Thu", "Fri"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
            start_hour: 9,
            end_hour: 18,
        }
    }
}

/// Stock inventory used when a request carries no rooms: two lecture halls
/// and two labs.
pub fn default_rooms() -> Vec<Room> {
    vec![
        Room::new("A", "lecture"),
        Room::new("B", "lecture"),
        Room::new("C", "lab"),
        Room::new("D", "lab"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchedulingOptions {
    /// Reject courses whose room type has no room in the inventory instead
    /// of leaving them unscheduled.
    pub reject_unknown_room_types: bool,
}

impl Default for SchedulingOptions {
    fn default() -> Self {
        Self {
            reject_unknown_room_types: true,
        }
    }
}

/// The complete input for one scheduling run.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingInput {
    pub courses: Vec<Course>,
    #[serde(default = "default_rooms")]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub slots: SlotConfig,
    #[serde(default)]
    pub options: SchedulingOptions,
}

#[cfg(test)]
impl SchedulingInput {
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses,
            rooms: default_rooms(),
            slots: SlotConfig::default(),
            options: SchedulingOptions::default(),
        }
    }
}

/// Placement of a single course. Unscheduled courses carry no slots and no room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub course_id: CourseId,
    pub course: String,
    pub group: String,
    pub teacher: String,
    pub duration: i64,
    pub assigned_slots: Vec<TimeSlot>,
    pub room: Option<RoomId>,
}

impl Assignment {
    pub fn scheduled(course: &Course, slots: Vec<TimeSlot>, room: RoomId) -> Self {
        Self {
            assigned_slots: slots,
            room: Some(room),
            ..Self::unscheduled(course)
        }
    }

    pub fn unscheduled(course: &Course) -> Self {
        Self {
            course_id: course.course_id.clone(),
            course: course.course.clone(),
            group: course.group.clone(),
            teacher: course.teacher.clone(),
            duration: course.duration,
            assigned_slots: Vec::new(),
            room: None,
        }
    }

    pub fn is_scheduled(&self) -> bool {
        self.room.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub courses: usize,
    pub conflict_edges: usize,
    pub scheduled: usize,
    pub unscheduled: usize,
}

impl fmt::Display for ScheduleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} courses, {} conflict edges, {} scheduled, {} unscheduled",
            self.courses, self.conflict_edges, self.scheduled, self.unscheduled
        )
    }
}

/// The final output of the solver.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingOutput {
    pub assignments: Vec<Assignment>,
    pub summary: ScheduleSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDegree {
    pub course_id: CourseId,
    pub degree: usize,
}

/// Size of the conflict graph and how contended each course is.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictReport {
    pub courses: usize,
    pub edges: usize,
    pub degrees: Vec<CourseDegree>,
}

/// A solve request plus an optional group or teacher to view. A group
/// filter wins over a teacher filter.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarRequest {
    #[serde(flatten)]
    pub input: SchedulingInput,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub teacher: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    pub course_id: CourseId,
    pub course: String,
    pub room: RoomId,
}

/// One slot of the timetable and whatever is taught in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarRow {
    pub slot: TimeSlot,
    pub entries: Vec<CalendarEntry>,
}
