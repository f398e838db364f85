use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn storage(store: &str, err: impl std::fmt::Display) -> Self {
        Self::Storage(format!("{store}: {err}"))
    }
}

/// Why a reservation was not made. Neither case is fatal; the caller may
/// try another hotel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationRefusal {
    #[error("hotel {0} not found")]
    HotelNotFound(String),
    #[error("hotel {0} has no available rooms")]
    NoAvailableRooms(String),
}

impl ReservationRefusal {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::HotelNotFound(_) => "hotel_not_found",
            Self::NoAvailableRooms(_) => "no_available_rooms",
        }
    }
}
