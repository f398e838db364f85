use serde::{Deserialize, Serialize};

/// One room-unit of one hotel held for one customer.
///
/// `customer_id` is stored as given; `hotel_id` is checked only when the
/// reservation is made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(rename = "reservation_id")]
    pub id: String,
    pub customer_id: String,
    pub hotel_id: String,
}

impl Reservation {
    pub fn new(id: String, customer_id: &str, hotel_id: &str) -> Self {
        Self { id, customer_id: customer_id.to_string(), hotel_id: hotel_id.to_string() }
    }
}
