use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use roomdesk::{available_rooms, Catalog, Ledger, Reservation, ReservationStatus, Room, RoomType};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// Build a hotel with `room_count` rooms cycling through the three types and
// a ledger with `reservation_count` one-night stays spread across rooms and
// days. The scan is O(rooms x reservations); this tracks how it holds up as
// the ledger grows.
fn populate(room_count: u32, reservation_count: usize) -> (Catalog, Ledger) {
    let types = [RoomType::Standard, RoomType::Deluxe, RoomType::Suite];
    let rooms = (0..room_count)
        .map(|i| Room {
            id: 100 + i,
            room_type: types[(i % 3) as usize],
            price_per_night: 2000.0 + 100.0 * i as f64,
            capacity: 2 + i % 3,
        })
        .collect();
    let catalog = Catalog::new(rooms);

    let mut ledger = Ledger::default();
    let start = date(2025, 1, 1);
    for i in 0..reservation_count {
        let check_in = start + chrono::Days::new((i / room_count as usize) as u64);
        ledger.append(Reservation {
            reservation_id: format!("R{i}"),
            guest_name: format!("Guest {i}"),
            guest_phone: "555-0100".to_string(),
            room_id: 100 + (i as u32 % room_count),
            check_in,
            check_out: check_in + chrono::Days::new(1),
            total_price: 2000.0,
            payment_method: "Card".to_string(),
            status: if i % 10 == 0 {
                ReservationStatus::Cancelled
            } else {
                ReservationStatus::Active
            },
        });
    }
    (catalog, ledger)
}

pub fn availability_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("available_rooms");

    for reservation_count in [100usize, 1_000, 5_000].iter() {
        let (catalog, ledger) = populate(30, *reservation_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(reservation_count),
            reservation_count,
            |b, _| {
                b.iter(|| {
                    black_box(available_rooms(
                        &catalog,
                        &ledger,
                        RoomType::Standard,
                        date(2025, 1, 10),
                        date(2025, 1, 12),
                    ))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, availability_benchmark);
criterion_main!(benches);
