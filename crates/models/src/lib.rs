//! Record types persisted by the reservation system.
//! - Every record is keyed by a generated string id (see [`identity`]).
//! - Serialized field names match the on-disk store layout.

pub mod identity;
pub mod hotel;
pub mod customer;
pub mod reservation;

pub use customer::Customer;
pub use hotel::Hotel;
pub use identity::{generate_id, IdGenerator, UuidV4Ids};
pub use reservation::Reservation;
