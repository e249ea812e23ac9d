use crate::data::{Room, RoomId};
use itertools::Itertools;
use std::collections::HashMap;

/// Room inventory partitioned by type. Within a type, rooms keep their load
/// order, which decides ties when several rooms are free.
#[derive(Debug, Clone)]
pub struct RoomPool {
    by_type: HashMap<String, Vec<RoomId>>,
}

impl RoomPool {
    pub fn new(rooms: &[Room]) -> Self {
        let by_type = rooms
            .iter()
            .map(|r| (r.room_type.clone(), r.room_id.clone()))
            .into_group_map();
        Self { by_type }
    }

    pub fn rooms_of_type(&self, room_type: &str) -> &[RoomId] {
        self.by_type
            .get(room_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_type(&self, room_type: &str) -> bool {
        !self.rooms_of_type(room_type).is_empty()
    }
}
