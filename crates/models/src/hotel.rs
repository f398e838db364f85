use serde::{Deserialize, Serialize};

/// A hotel and its room inventory.
///
/// `rooms` is fixed at creation; `available_rooms` is the only field that
/// changes afterwards, moving by one per reservation or cancellation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    #[serde(rename = "hotel_id")]
    pub id: String,
    pub name: String,
    pub location: String,
    pub rooms: i64,
    pub available_rooms: i64,
}

impl Hotel {
    /// New hotel with every room available.
    pub fn new(id: String, name: &str, location: &str, rooms: i64) -> Self {
        Self {
            id,
            name: name.to_string(),
            location: location.to_string(),
            rooms,
            available_rooms: rooms,
        }
    }

    pub fn has_vacancy(&self) -> bool {
        self.available_rooms > 0
    }

    /// Take one room; returns false and leaves the counter alone when none is free.
    pub fn take_room(&mut self) -> bool {
        if !self.has_vacancy() {
            return false;
        }
        self.available_rooms -= 1;
        true
    }

    pub fn release_room(&mut self) {
        self.available_rooms += 1;
    }
}
