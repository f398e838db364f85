use std::sync::Arc;

use configs::StoreConfig;
use models::{Hotel, IdGenerator, Reservation, UuidV4Ids};
use tracing::{debug, info, warn};

use crate::errors::{ReservationRefusal, ServiceError};
use crate::storage::{Collection, CollectionStore, JsonMapStore};

/// Result of a reservation attempt that did not fail on storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    Booked(Reservation),
    Refused(ReservationRefusal),
}

impl BookingOutcome {
    pub fn into_reservation(self) -> Option<Reservation> {
        match self {
            Self::Booked(r) => Some(r),
            Self::Refused(_) => None,
        }
    }
}

/// Makes and cancels reservations, keeping each hotel's `available_rooms`
/// in step with its active reservations.
///
/// Reservations and hotels live in separate stores and are written one after
/// the other: hotels first, then reservations. A failure between the two
/// writes leaves availability adjusted without the matching reservation
/// change. Calls must not overlap; there is no locking around the
/// load-mutate-save cycle.
#[derive(Clone)]
pub struct ReservationManager {
    reservations: Arc<dyn CollectionStore<Reservation>>,
    hotels: Arc<dyn CollectionStore<Hotel>>,
    ids: Arc<dyn IdGenerator>,
}

impl ReservationManager {
    pub fn new(
        reservations: Arc<dyn CollectionStore<Reservation>>,
        hotels: Arc<dyn CollectionStore<Hotel>>,
    ) -> Self {
        Self { reservations, hotels, ids: Arc::new(UuidV4Ids) }
    }

    pub fn from_config(cfg: &StoreConfig) -> Self {
        Self::new(
            Arc::new(JsonMapStore::<Reservation>::new("reservations", &cfg.reservations_path)),
            Arc::new(JsonMapStore::<Hotel>::new("hotels", &cfg.hotels_path)),
        )
    }

    pub fn with_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Reserve one room of `hotel_id` for `customer_id`.
    ///
    /// Returns `None` when the hotel is unknown or fully booked; neither
    /// store is written in that case.
    pub fn create(&self, customer_id: &str, hotel_id: &str) -> Result<Option<Reservation>, ServiceError> {
        Ok(self.try_create(customer_id, hotel_id)?.into_reservation())
    }

    /// Like [`Self::create`], but says why a reservation was refused.
    pub fn try_create(&self, customer_id: &str, hotel_id: &str) -> Result<BookingOutcome, ServiceError> {
        let mut reservations = self.reservations.load();
        let mut hotels = self.hotels.load();

        let refusal = match hotels.get_mut(hotel_id) {
            None => Some(ReservationRefusal::HotelNotFound(hotel_id.to_string())),
            Some(hotel) => (!hotel.take_room())
                .then(|| ReservationRefusal::NoAvailableRooms(hotel_id.to_string())),
        };
        if let Some(refusal) = refusal {
            warn!(%hotel_id, %customer_id, reason = refusal.reason(), "reservation refused");
            return Ok(BookingOutcome::Refused(refusal));
        }
        self.hotels.save(&hotels)?;

        let reservation = Reservation::new(self.ids.next_id(), customer_id, hotel_id);
        reservations.insert(reservation.id.clone(), reservation.clone());
        self.reservations.save(&reservations)?;

        info!(reservation_id = %reservation.id, %hotel_id, %customer_id, "reservation created");
        Ok(BookingOutcome::Booked(reservation))
    }

    /// Cancel a reservation; returns whether it existed.
    ///
    /// The room goes back to the hotel if the hotel still exists; otherwise
    /// only the reservation is removed.
    pub fn cancel(&self, reservation_id: &str) -> Result<bool, ServiceError> {
        let mut reservations = self.reservations.load();
        let mut hotels = self.hotels.load();

        let Some(reservation) = reservations.remove(reservation_id) else {
            return Ok(false);
        };

        match hotels.get_mut(&reservation.hotel_id) {
            Some(hotel) => {
                hotel.release_room();
                self.hotels.save(&hotels)?;
            }
            None => {
                debug!(%reservation_id, hotel_id = %reservation.hotel_id, "hotel gone; availability not restored");
            }
        }

        self.reservations.save(&reservations)?;
        info!(%reservation_id, hotel_id = %reservation.hotel_id, "reservation cancelled");
        Ok(true)
    }

    pub fn list(&self) -> Collection<Reservation> {
        self.reservations.load()
    }

    pub fn get(&self, id: &str) -> Option<Reservation> {
        self.reservations.load().remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryMapStore;

    struct Fixture {
        hotels: Arc<MemoryMapStore<Hotel>>,
        reservations: Arc<MemoryMapStore<Reservation>>,
        manager: ReservationManager,
    }

    fn fixture(seed: &[Hotel]) -> Result<Fixture, anyhow::Error> {
        let hotels = Arc::new(MemoryMapStore::<Hotel>::new("hotels"));
        let reservations = Arc::new(MemoryMapStore::<Reservation>::new("reservations"));
        let records: Collection<Hotel> = seed.iter().map(|h| (h.id.clone(), h.clone())).collect();
        hotels.save(&records)?;
        let manager = ReservationManager::new(reservations.clone(), hotels.clone());
        Ok(Fixture { hotels, reservations, manager })
    }

    fn available(f: &Fixture, id: &str) -> Option<i64> {
        f.hotels.load().get(id).map(|h| h.available_rooms)
    }

    #[test]
    fn create_takes_one_room() -> Result<(), anyhow::Error> {
        let f = fixture(&[Hotel::new("h1".into(), "Reserve Hotel", "Chicago", 3)])?;
        let r = f.manager.create("c1", "h1")?.unwrap();
        assert_eq!(r.hotel_id, "h1");
        assert_eq!(r.customer_id, "c1");
        assert_eq!(available(&f, "h1"), Some(2));
        assert!(f.reservations.load().contains_key(&r.id));
        Ok(())
    }

    #[test]
    fn customer_id_is_not_checked() -> Result<(), anyhow::Error> {
        let f = fixture(&[Hotel::new("h1".into(), "Inn", "Rome", 1)])?;
        assert!(f.manager.create("nobody", "h1")?.is_some());
        Ok(())
    }

    #[test]
    fn unknown_hotel_is_refused_without_writes() -> Result<(), anyhow::Error> {
        let f = fixture(&[])?;
        let hotel_saves = f.hotels.save_count();
        let outcome = f.manager.try_create("c1", "missing")?;
        assert_eq!(outcome, BookingOutcome::Refused(ReservationRefusal::HotelNotFound("missing".into())));
        assert_eq!(f.hotels.save_count(), hotel_saves);
        assert_eq!(f.reservations.save_count(), 0);
        Ok(())
    }

    #[test]
    fn full_hotel_is_refused_without_writes() -> Result<(), anyhow::Error> {
        let f = fixture(&[Hotel::new("h1".into(), "Full", "Paris", 1)])?;
        assert!(f.manager.create("c1", "h1")?.is_some());

        let hotels_before = f.hotels.load();
        let reservations_before = f.reservations.load();
        let outcome = f.manager.try_create("c2", "h1")?;
        assert_eq!(outcome, BookingOutcome::Refused(ReservationRefusal::NoAvailableRooms("h1".into())));
        assert_eq!(f.hotels.load(), hotels_before);
        assert_eq!(f.reservations.load(), reservations_before);
        Ok(())
    }

    #[test]
    fn negative_availability_is_treated_as_full() -> Result<(), anyhow::Error> {
        let f = fixture(&[Hotel::new("h1".into(), "Odd", "Nowhere", -2)])?;
        assert!(f.manager.create("c1", "h1")?.is_none());
        assert_eq!(available(&f, "h1"), Some(-2));
        Ok(())
    }

    #[test]
    fn cancel_restores_room() -> Result<(), anyhow::Error> {
        let f = fixture(&[Hotel::new("h1".into(), "Cancel Hotel", "Miami", 2)])?;
        let r = f.manager.create("c1", "h1")?.unwrap();
        assert_eq!(available(&f, "h1"), Some(1));

        assert!(f.manager.cancel(&r.id)?);
        assert_eq!(available(&f, "h1"), Some(2));
        assert!(f.manager.get(&r.id).is_none());
        assert!(!f.manager.cancel(&r.id)?);
        Ok(())
    }

    #[test]
    fn cancel_unknown_is_a_no_op() -> Result<(), anyhow::Error> {
        let f = fixture(&[Hotel::new("h1".into(), "Inn", "Rome", 2)])?;
        let hotel_saves = f.hotels.save_count();
        assert!(!f.manager.cancel("missing")?);
        assert_eq!(f.hotels.save_count(), hotel_saves);
        assert_eq!(f.reservations.save_count(), 0);
        Ok(())
    }

    #[test]
    fn cancel_after_hotel_removed_skips_restoration() -> Result<(), anyhow::Error> {
        let f = fixture(&[Hotel::new("h1".into(), "Gone", "Atlantis", 2)])?;
        let r = f.manager.create("c1", "h1")?.unwrap();
        f.hotels.save(&Collection::new())?;
        let hotel_saves = f.hotels.save_count();

        assert!(f.manager.cancel(&r.id)?);
        assert_eq!(f.hotels.save_count(), hotel_saves);
        assert!(f.hotels.load().is_empty());
        assert!(f.manager.list().is_empty());
        Ok(())
    }
}
