//! Service layer owning the mutation logic for hotels, customers and reservations.
//! - Each manager loads its collection(s), mutates in memory and saves the whole collection back.
//! - Persistence is injected through [`storage::CollectionStore`], so managers run against files or memory alike.
//! - Domain outcomes are plain values (`bool`, `Option`); only failed writes surface as [`errors::ServiceError`].

pub mod errors;
pub mod storage;
pub mod managers;
pub mod system;

pub use errors::{ReservationRefusal, ServiceError};
pub use managers::{BookingOutcome, CustomerManager, HotelManager, ReservationManager};
pub use system::HotelSystem;
