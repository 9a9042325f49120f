// Room catalog: the fixed room inventory the availability engine scans.
// Rooms are loaded from the snapshot on startup, or seeded once from the
// default set when the store is empty. They are never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

// The three bookable room categories. Serialized as upper-case strings
// in the snapshot ("STANDARD" | "DELUXE" | "SUITE").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomType::Standard => write!(f, "STANDARD"),
            RoomType::Deluxe => write!(f, "DELUXE"),
            RoomType::Suite => write!(f, "SUITE"),
        }
    }
}

// A single room. Immutable value: ids are assigned externally (seed data or
// snapshot) and identify the room across reservations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: u32,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub price_per_night: f64,
    pub capacity: u32,
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "room {} | {} | {:.2}/night | sleeps {}",
            self.id, self.room_type, self.price_per_night, self.capacity
        )
    }
}

// Ordered room inventory. Insertion order is preserved and drives the order
// of availability results.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    rooms: Vec<Room>,
}

impl Catalog {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    // The default inventory used when no snapshot exists: two rooms of each
    // type, cheapest first within a type.
    pub fn seed_default() -> Self {
        Self::new(vec![
            Room { id: 101, room_type: RoomType::Standard, price_per_night: 2000.0, capacity: 2 },
            Room { id: 102, room_type: RoomType::Standard, price_per_night: 2200.0, capacity: 2 },
            Room { id: 201, room_type: RoomType::Deluxe, price_per_night: 3500.0, capacity: 3 },
            Room { id: 202, room_type: RoomType::Deluxe, price_per_night: 3800.0, capacity: 3 },
            Room { id: 301, room_type: RoomType::Suite, price_per_night: 6000.0, capacity: 4 },
            Room { id: 302, room_type: RoomType::Suite, price_per_night: 6500.0, capacity: 4 },
        ])
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn room(&self, id: u32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn rooms_of_type(&self, room_type: RoomType) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(move |r| r.room_type == room_type)
    }
}
