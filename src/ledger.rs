// Reservation ledger: the append-mostly record of every booking ever made.
// Cancellation is a soft state; entries are never removed, so history
// survives restarts through the snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// One-way lifecycle of a reservation. Snapshots keep the original boolean
// `cancelled` field, so the status round-trips through `cancelled_flag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    Active,
    Cancelled,
}

impl ReservationStatus {
    pub fn is_cancelled(self) -> bool {
        self == ReservationStatus::Cancelled
    }
}

// Serde bridge between the typed status and the `cancelled: bool` field of
// the snapshot schema.
mod cancelled_flag {
    use super::ReservationStatus;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        status: &ReservationStatus,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(status.is_cancelled())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<ReservationStatus, D::Error> {
        let cancelled = bool::deserialize(deserializer)?;
        Ok(if cancelled {
            ReservationStatus::Cancelled
        } else {
            ReservationStatus::Active
        })
    }
}

// A booked stay. `check_out` is exclusive: the guest occupies the room for
// every night in [check_in, check_out). The room is referenced by id; the
// catalog owns the room records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub reservation_id: String,
    pub guest_name: String,
    pub guest_phone: String,
    pub room_id: u32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_price: f64,
    pub payment_method: String,
    #[serde(rename = "cancelled", with = "cancelled_flag")]
    pub status: ReservationStatus,
}

impl Reservation {
    pub fn is_cancelled(&self) -> bool {
        self.status.is_cancelled()
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}) | room {} | {} -> {} | total {:.2} | paid via {} | {}",
            self.reservation_id,
            self.guest_name,
            self.guest_phone,
            self.room_id,
            self.check_in,
            self.check_out,
            self.total_price,
            self.payment_method,
            match self.status {
                ReservationStatus::Active => "active",
                ReservationStatus::Cancelled => "cancelled",
            }
        )
    }
}

// Ordered reservation history: append order is creation order, and the
// collection never shrinks. Mutation goes through the booking and
// cancellation services only.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    reservations: Vec<Reservation>,
}

impl Ledger {
    pub fn new(reservations: Vec<Reservation>) -> Self {
        Self { reservations }
    }

    pub fn append(&mut self, reservation: Reservation) {
        self.reservations.push(reservation);
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    // Reservation ids are matched case-insensitively everywhere they are
    // looked up.
    pub fn find(&self, reservation_id: &str) -> Option<&Reservation> {
        self.reservations
            .iter()
            .find(|r| r.reservation_id.eq_ignore_ascii_case(reservation_id))
    }

    pub(crate) fn find_mut(&mut self, reservation_id: &str) -> Option<&mut Reservation> {
        self.reservations
            .iter_mut()
            .find(|r| r.reservation_id.eq_ignore_ascii_case(reservation_id))
    }

    pub fn contains(&self, reservation_id: &str) -> bool {
        self.find(reservation_id).is_some()
    }

    // Non-cancelled reservations on a given room, in creation order.
    pub fn active_for_room(&self, room_id: u32) -> impl Iterator<Item = &Reservation> {
        self.reservations
            .iter()
            .filter(move |r| r.room_id == room_id && !r.is_cancelled())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_reservation(id: &str, room_id: u32) -> Reservation {
        Reservation {
            reservation_id: id.to_string(),
            guest_name: "Jane Doe".to_string(),
            guest_phone: "555-0100".to_string(),
            room_id,
            check_in: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            total_price: 4000.0,
            payment_method: "Card".to_string(),
            status: ReservationStatus::Active,
        }
    }

    #[test]
    fn test_append_preserves_creation_order() {
        let mut ledger = Ledger::default();
        ledger.append(sample_reservation("R1", 101));
        ledger.append(sample_reservation("R2", 102));
        ledger.append(sample_reservation("R3", 101));

        let ids: Vec<&str> = ledger
            .reservations()
            .iter()
            .map(|r| r.reservation_id.as_str())
            .collect();
        assert_eq!(ids, vec!["R1", "R2", "R3"]);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let mut ledger = Ledger::default();
        ledger.append(sample_reservation("R1700000000000", 101));

        assert!(ledger.find("r1700000000000").is_some());
        assert!(ledger.find("R1700000000000").is_some());
        assert!(ledger.find("R9999").is_none());
    }

    #[test]
    fn test_active_for_room_skips_cancelled() {
        let mut ledger = Ledger::default();
        let mut cancelled = sample_reservation("R1", 101);
        cancelled.status = ReservationStatus::Cancelled;
        ledger.append(cancelled);
        ledger.append(sample_reservation("R2", 101));
        ledger.append(sample_reservation("R3", 202));

        let active: Vec<&str> = ledger
            .active_for_room(101)
            .map(|r| r.reservation_id.as_str())
            .collect();
        assert_eq!(active, vec!["R2"]);
    }

    #[test]
    fn test_reservation_snapshot_uses_cancelled_bool() {
        let mut reservation = sample_reservation("R1", 101);
        reservation.status = ReservationStatus::Cancelled;

        let json = serde_json::to_string(&reservation).unwrap();
        assert!(json.contains("\"cancelled\":true"));
        assert!(json.contains("\"reservationId\":\"R1\""));
        assert!(json.contains("\"checkIn\":\"2024-01-01\""));

        let back: Reservation = serde_json::from_str(&json).unwrap();
        assert_eq!(back.status, ReservationStatus::Cancelled);
        assert_eq!(back, reservation);
    }

    #[test]
    fn test_nights_counts_whole_days() {
        let reservation = sample_reservation("R1", 101);
        assert_eq!(reservation.nights(), 2);
    }
}
