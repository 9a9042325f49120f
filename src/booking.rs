// Booking service: validates a requested stay, resolves the chosen room
// against the availability engine, prices the stay, charges the payment
// collaborator and appends the reservation to the ledger. Persistence is
// the caller's concern (see session).

use chrono::{NaiveDate, Utc};
use thiserror::Error;
use tracing::info;

use crate::availability::available_rooms;
use crate::catalog::{Catalog, RoomType};
use crate::ledger::{Ledger, Reservation, ReservationStatus};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("payment declined: {0}")]
pub struct PaymentError(pub String);

// Payment collaborator contract: amount, method and reference in;
// success or failure out. The default implementation below simulates an
// always-successful charge; a real gateway can be swapped in without
// touching the booking service.
pub trait PaymentProcessor {
    fn process(&self, amount: f64, method: &str, reference: &str) -> Result<(), PaymentError>;
}

// Simulated payment: acknowledges every charge.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedPaymentProcessor;

impl PaymentProcessor for SimulatedPaymentProcessor {
    fn process(&self, amount: f64, method: &str, reference: &str) -> Result<(), PaymentError> {
        info!(amount, method, reference, "payment simulated, accepting");
        Ok(())
    }
}

// Everything the booking service needs for one reservation. The shell
// collects these as already-validated primitives; the service re-checks the
// core preconditions regardless.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub guest_name: String,
    pub guest_phone: String,
    pub room_type: RoomType,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_id: u32,
    pub payment_method: String,
    pub payment_reference: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("guest name must not be empty")]
    EmptyGuestName,

    #[error("check-out must be strictly after check-in")]
    InvalidDateRange,

    #[error("room {0} is not available for the requested type and dates")]
    RoomUnavailable(u32),

    #[error("payment failed: {0}")]
    Payment(#[from] PaymentError),
}

// Book a stay. Preconditions are checked in order: non-empty guest name,
// strictly positive date range, then the chosen room must be among the
// availability results for the requested type. On success the reservation
// is appended active and returned.
pub fn book(
    catalog: &Catalog,
    ledger: &mut Ledger,
    payment: &dyn PaymentProcessor,
    request: &BookingRequest,
) -> Result<Reservation, BookingError> {
    let guest_name = request.guest_name.trim();
    if guest_name.is_empty() {
        return Err(BookingError::EmptyGuestName);
    }
    if request.check_out <= request.check_in {
        return Err(BookingError::InvalidDateRange);
    }

    let room = available_rooms(catalog, ledger, request.room_type, request.check_in, request.check_out)
        .into_iter()
        .find(|r| r.id == request.room_id)
        .ok_or(BookingError::RoomUnavailable(request.room_id))?;

    let nights = (request.check_out - request.check_in).num_days();
    let total_price = nights as f64 * room.price_per_night;

    payment.process(total_price, &request.payment_method, &request.payment_reference)?;

    let reservation = Reservation {
        reservation_id: next_reservation_id(ledger),
        guest_name: guest_name.to_string(),
        guest_phone: request.guest_phone.trim().to_string(),
        room_id: room.id,
        check_in: request.check_in,
        check_out: request.check_out,
        total_price,
        payment_method: request.payment_method.clone(),
        status: ReservationStatus::Active,
    };
    info!(
        reservation_id = %reservation.reservation_id,
        room_id = room.id,
        nights,
        total_price,
        "reservation booked"
    );
    ledger.append(reservation.clone());
    Ok(reservation)
}

// Ids follow the original "R<millis>" scheme. The clock is monotone enough
// within one interactive session; the bump loop keeps ids collision-free
// against whatever the ledger already holds.
fn next_reservation_id(ledger: &Ledger) -> String {
    let mut millis = Utc::now().timestamp_millis();
    loop {
        let id = format!("R{millis}");
        if !ledger.contains(&id) {
            return id;
        }
        millis += 1;
    }
}
