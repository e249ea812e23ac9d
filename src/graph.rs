//! Conflict graph over courses.
//!
//! Two courses conflict when they share a teacher or a group: they may never
//! sit in overlapping slots. Nodes are positions in the course list, so the
//! graph borrows the courses rather than copying them.

use crate::data::{Course, CourseDegree};
use itertools::Itertools;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct ConflictGraph<'a> {
    courses: &'a [Course],
    adjacency: Vec<BTreeSet<usize>>,
}

impl<'a> ConflictGraph<'a> {
    /// Pairwise comparison of every unordered pair, O(n²).
    pub fn build(courses: &'a [Course]) -> Self {
        let mut adjacency = vec![BTreeSet::new(); courses.len()];

        for ((i, a), (j, b)) in courses.iter().enumerate().tuple_combinations() {
            if a.teacher == b.teacher || a.group == b.group {
                adjacency[i].insert(j);
                adjacency[j].insert(i);
            }
        }

        Self { courses, adjacency }
    }

    pub fn node_count(&self) -> usize {
        self.courses.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    pub fn course(&self, node: usize) -> &'a Course {
        &self.courses[node]
    }

    pub fn degree(&self, node: usize) -> usize {
        self.adjacency[node].len()
    }

    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[node].iter().copied()
    }

    /// Nodes ordered most-constrained first; equal degrees keep input order.
    pub fn by_descending_degree(&self) -> Vec<usize> {
        (0..self.node_count())
            .sorted_by_key(|&n| std::cmp::Reverse(self.degree(n)))
            .collect()
    }

    pub fn degrees(&self) -> Vec<CourseDegree> {
        (0..self.node_count())
            .map(|n| CourseDegree {
                course_id: self.courses[n].course_id.clone(),
                degree: self.degree(n),
            })
            .collect()
    }
}
