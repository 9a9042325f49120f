// Cancellation service: flips a reservation from active to cancelled.
// The transition is one-way and idempotent; re-cancelling is a no-op, not
// an error. Records are never deleted, so history is preserved.

use tracing::info;

use crate::ledger::{Ledger, Reservation, ReservationStatus};

#[derive(Debug, Clone, PartialEq)]
pub enum CancelOutcome {
    // No reservation with that id (case-insensitive match).
    NotFound,
    // Matched but already cancelled; carries the unchanged reservation.
    AlreadyCancelled(Reservation),
    // Was active and is now cancelled.
    Cancelled(Reservation),
}

pub fn cancel(ledger: &mut Ledger, reservation_id: &str) -> CancelOutcome {
    let Some(reservation) = ledger.find_mut(reservation_id) else {
        return CancelOutcome::NotFound;
    };
    if reservation.is_cancelled() {
        return CancelOutcome::AlreadyCancelled(reservation.clone());
    }
    reservation.status = ReservationStatus::Cancelled;
    info!(reservation_id = %reservation.reservation_id, "reservation cancelled");
    CancelOutcome::Cancelled(reservation.clone())
}
