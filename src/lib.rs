// Hotel room inventory and reservation core.
//
// The availability, booking and cancellation services operate on a catalog
// of rooms and an append-mostly ledger of reservations; the whole state is
// persisted as one JSON snapshot after every mutation. The interactive
// shell in src/bin/roomdesk.rs only collects input and presents results.

pub mod availability;
pub mod booking;
pub mod cancellation;
pub mod catalog;
pub mod ledger;
pub mod persistence;
pub mod session;

// Re-export key types for convenience
pub use availability::{available_rooms, is_room_available, ranges_overlap};
pub use booking::{
    book, BookingError, BookingRequest, PaymentError, PaymentProcessor, SimulatedPaymentProcessor,
};
pub use cancellation::{cancel, CancelOutcome};
pub use catalog::{Catalog, Room, RoomType};
pub use ledger::{Ledger, Reservation, ReservationStatus};
pub use persistence::{PersistenceError, Snapshot, SnapshotStore};
pub use session::{Committed, HotelSession};
