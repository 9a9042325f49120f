// Availability engine: decides which rooms are free for a requested stay.
// A room is available when no non-cancelled reservation on it overlaps the
// requested half-open [check_in, check_out) range, so back-to-back stays
// sharing a date never collide.

use chrono::NaiveDate;

use crate::catalog::{Catalog, Room, RoomType};
use crate::ledger::Ledger;

// Two half-open ranges [a, b) and [c, d) overlap iff neither ends before
// the other starts.
pub fn ranges_overlap(a: NaiveDate, b: NaiveDate, c: NaiveDate, d: NaiveDate) -> bool {
    !(b <= c || a >= d)
}

// A room is free over the range when no active reservation on it overlaps.
pub fn is_room_available(
    room: &Room,
    ledger: &Ledger,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> bool {
    ledger
        .active_for_room(room.id)
        .all(|r| !ranges_overlap(check_in, check_out, r.check_in, r.check_out))
}

// All rooms of the requested type that are free over the range, in catalog
// order. Callers validate `check_in < check_out` before asking. A linear
// scan over rooms x reservations is plenty at the scale of one hotel; no
// index is maintained.
pub fn available_rooms(
    catalog: &Catalog,
    ledger: &Ledger,
    room_type: RoomType,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Vec<Room> {
    catalog
        .rooms_of_type(room_type)
        .filter(|room| is_room_available(room, ledger, check_in, check_out))
        .copied()
        .collect()
}
