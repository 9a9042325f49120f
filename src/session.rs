// Hotel session: the context object the interactive shell drives. It owns
// the catalog, the ledger, the snapshot store and the payment collaborator,
// and it is the only place mutations and persistence meet: every booking or
// cancellation is followed by a full snapshot save.

use chrono::NaiveDate;
use tracing::{error, info};

use crate::availability;
use crate::booking::{self, BookingError, BookingRequest, PaymentProcessor};
use crate::cancellation::{self, CancelOutcome};
use crate::catalog::{Catalog, Room, RoomType};
use crate::ledger::{Ledger, Reservation};
use crate::persistence::{PersistenceError, SnapshotStore};

// Result of a state-changing operation. The in-memory mutation always
// stands; a failed snapshot write is carried alongside instead of rolling
// it back, so the caller can report the durability gap.
#[derive(Debug)]
pub struct Committed<T> {
    pub value: T,
    pub save_error: Option<PersistenceError>,
}

pub struct HotelSession {
    catalog: Catalog,
    ledger: Ledger,
    store: SnapshotStore,
    payment: Box<dyn PaymentProcessor>,
}

impl HotelSession {
    // Hydrate from the snapshot store; seed and persist the default catalog
    // when the store has no rooms.
    pub fn open(store: SnapshotStore, payment: Box<dyn PaymentProcessor>) -> Self {
        let snapshot = store.load();
        let mut session = Self {
            catalog: Catalog::new(snapshot.rooms),
            ledger: Ledger::new(snapshot.reservations),
            store,
            payment,
        };
        if session.catalog.is_empty() {
            session.catalog = Catalog::seed_default();
            info!(rooms = session.catalog.rooms().len(), "empty catalog, seeding default rooms");
            if let Some(e) = session.persist() {
                error!(error = %e, "could not persist seeded catalog");
            }
        }
        session
    }

    pub fn available_rooms(
        &self,
        room_type: RoomType,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Vec<Room> {
        availability::available_rooms(&self.catalog, &self.ledger, room_type, check_in, check_out)
    }

    pub fn book(&mut self, request: &BookingRequest) -> Result<Committed<Reservation>, BookingError> {
        let reservation = booking::book(&self.catalog, &mut self.ledger, self.payment.as_ref(), request)?;
        let save_error = self.persist();
        Ok(Committed { value: reservation, save_error })
    }

    pub fn cancel(&mut self, reservation_id: &str) -> Committed<CancelOutcome> {
        let outcome = cancellation::cancel(&mut self.ledger, reservation_id);
        // Only an actual state change warrants a snapshot.
        let save_error = match &outcome {
            CancelOutcome::Cancelled(_) => self.persist(),
            CancelOutcome::NotFound | CancelOutcome::AlreadyCancelled(_) => None,
        };
        Committed { value: outcome, save_error }
    }

    pub fn reservation(&self, reservation_id: &str) -> Option<&Reservation> {
        self.ledger.find(reservation_id)
    }

    pub fn reservations(&self) -> &[Reservation] {
        self.ledger.reservations()
    }

    pub fn rooms(&self) -> &[Room] {
        self.catalog.rooms()
    }

    // Final save on exit.
    pub fn save(&self) -> Result<(), PersistenceError> {
        self.store.save(&self.catalog, &self.ledger)
    }

    fn persist(&self) -> Option<PersistenceError> {
        match self.store.save(&self.catalog, &self.ledger) {
            Ok(()) => None,
            Err(e) => {
                error!(error = %e, "snapshot save failed, in-memory state not rolled back");
                Some(e)
            }
        }
    }
}
