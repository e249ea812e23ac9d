use crate::data::{
    Assignment, ConflictReport, Course, ScheduleSummary, SchedulingInput, SchedulingOutput,
};
use crate::graph::ConflictGraph;
use crate::rooms::RoomPool;
use crate::timeslots::SlotUniverse;
use crate::validation::{SolveError, validate_input};
use log::{debug, info, trace, warn};
use std::collections::{HashMap, HashSet};
use std::ops::Range;
use std::time::Instant;

/// Validates the input, builds the conflict graph and schedules every course
/// in a single greedy pass.
pub fn solve(input: &SchedulingInput) -> Result<SchedulingOutput, SolveError> {
    let start_time = Instant::now();
    validate_input(input)?;

    let universe = SlotUniverse::generate(&input.slots);
    let pool = RoomPool::new(&input.rooms);
    let graph = ConflictGraph::build(&input.courses);
    info!(
        "Conflict graph: {} courses, {} edges; {} slots, {} rooms",
        graph.node_count(),
        graph.edge_count(),
        universe.len(),
        input.rooms.len()
    );

    let assignments = greedy_schedule(&graph, &universe, &pool);
    let scheduled = assignments.iter().filter(|a| a.is_scheduled()).count();
    let summary = ScheduleSummary {
        courses: assignments.len(),
        conflict_edges: graph.edge_count(),
        scheduled,
        unscheduled: assignments.len() - scheduled,
    };
    info!("Scheduling done in {:.2?}: {}", start_time.elapsed(), summary);

    Ok(SchedulingOutput {
        assignments,
        summary,
    })
}

/// Validates the input and reports the conflict graph without scheduling.
pub fn conflicts(input: &SchedulingInput) -> Result<ConflictReport, SolveError> {
    validate_input(input)?;
    let graph = ConflictGraph::build(&input.courses);
    Ok(ConflictReport {
        courses: graph.node_count(),
        edges: graph.edge_count(),
        degrees: graph.degrees(),
    })
}

/// Occupancy for one run. `course_slots` holds the full window of every
/// placed course, keyed by graph node.
#[derive(Debug, Default)]
struct ScheduleState<'a> {
    occupied: HashSet<(&'a str, usize)>,
    course_slots: HashMap<usize, Range<usize>>,
}

impl<'a> ScheduleState<'a> {
    fn clashes_with_neighbors(
        &self,
        graph: &ConflictGraph<'_>,
        node: usize,
        window: &Range<usize>,
    ) -> bool {
        graph.neighbors(node).any(|n| {
            self.course_slots
                .get(&n)
                .is_some_and(|taken| taken.start < window.end && window.start < taken.end)
        })
    }

    fn room_is_free(&self, room: &str, window: &Range<usize>) -> bool {
        window.clone().all(|s| !self.occupied.contains(&(room, s)))
    }

    fn place(&mut self, node: usize, room: &'a str, window: Range<usize>) {
        for s in window.clone() {
            self.occupied.insert((room, s));
        }
        self.course_slots.insert(node, window);
    }
}

/// Assigns each course a same-day run of `duration` slots and a room of its
/// type, most-constrained courses first. Courses that fit nowhere come back
/// unscheduled. Assignments are returned in processing order.
pub fn greedy_schedule<'a>(
    graph: &ConflictGraph<'_>,
    universe: &SlotUniverse,
    pool: &'a RoomPool,
) -> Vec<Assignment> {
    let mut state = ScheduleState::default();
    let mut assignments = Vec::with_capacity(graph.node_count());

    for node in graph.by_descending_degree() {
        let course = graph.course(node);
        match find_placement(&state, graph, universe, pool, node, course) {
            Some((window, room)) => {
                debug!(
                    "Placed course {} in room {} starting {} ({} slots, degree {})",
                    course.course_id,
                    room,
                    universe.slot(window.start),
                    course.duration,
                    graph.degree(node)
                );
                let slots = universe.resolve(window.clone());
                state.place(node, room, window);
                assignments.push(Assignment::scheduled(course, slots, room.to_string()));
            }
            None => {
                warn!(
                    "Course {} could not be scheduled (duration {}, room type '{}')",
                    course.course_id, course.duration, course.room_type
                );
                assignments.push(Assignment::unscheduled(course));
            }
        }
    }

    assignments
}

fn find_placement<'a>(
    state: &ScheduleState<'a>,
    graph: &ConflictGraph<'_>,
    universe: &SlotUniverse,
    pool: &'a RoomPool,
    node: usize,
    course: &Course,
) -> Option<(Range<usize>, &'a str)> {
    let rooms = pool.rooms_of_type(&course.room_type);
    if rooms.is_empty() {
        return None;
    }
    let duration = usize::try_from(course.duration).unwrap_or(0);

    for start in 0..universe.len() {
        let Some(window) = universe.window(start, duration) else {
            continue;
        };
        if state.clashes_with_neighbors(graph, node, &window) {
            trace!(
                "Course {}: window at {} clashes with a conflicting course",
                course.course_id,
                universe.slot(start)
            );
            continue;
        }
        if let Some(room) = rooms.iter().find(|r| state.room_is_free(r, &window)) {
            return Some((window, room.as_str()));
        }
        trace!(
            "Course {}: no free '{}' room at {}",
            course.course_id,
            course.room_type,
            universe.slot(start)
        );
    }

    None
}
