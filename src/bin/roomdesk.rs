// Interactive reservation desk. All this binary does is collect validated
// input, call the session and print what comes back; every rule lives in
// the roomdesk library.

use std::io::{self, Write};

use anyhow::Context;
use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

use roomdesk::{
    BookingRequest, CancelOutcome, HotelSession, RoomType, SimulatedPaymentProcessor,
    SnapshotStore,
};

const DATA_FILE: &str = "hotel-data.json";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let data_file = std::env::args().nth(1).unwrap_or_else(|| DATA_FILE.to_string());
    let mut session = HotelSession::open(
        SnapshotStore::new(&data_file),
        Box::new(SimulatedPaymentProcessor),
    );

    loop {
        print_menu();
        let Some(choice) = read_u32("Enter your choice: ") else { break };
        match choice {
            1 => {
                search_available_rooms(&session);
            }
            2 => {
                make_reservation(&mut session);
            }
            3 => {
                cancel_reservation(&mut session);
            }
            4 => {
                view_reservation_details(&session);
            }
            5 => list_all_reservations(&session),
            6 => list_all_rooms(&session),
            7 => break,
            _ => println!("Invalid choice. Please try again."),
        }
        println!();
    }

    session
        .save()
        .with_context(|| format!("could not save data to {data_file}"))?;
    println!("Data saved. Exiting... Goodbye!");
    Ok(())
}

fn print_menu() {
    println!("========== HOTEL RESERVATION SYSTEM ==========");
    println!("1. Search Available Rooms");
    println!("2. Make a Reservation");
    println!("3. Cancel a Reservation");
    println!("4. View Reservation Details");
    println!("5. List All Reservations");
    println!("6. List All Rooms");
    println!("7. Save & Exit");
    println!("==============================================");
}

fn search_available_rooms(session: &HotelSession) -> Option<()> {
    println!("---- Search Available Rooms ----");
    let room_type = read_room_type()?;
    let check_in = read_date("Enter check-in date (yyyy-MM-dd): ")?;
    let check_out = read_date("Enter check-out date (yyyy-MM-dd): ")?;

    if check_out <= check_in {
        println!("Invalid dates. Check-out must be after check-in.");
        return Some(());
    }

    let available = session.available_rooms(room_type, check_in, check_out);
    if available.is_empty() {
        println!("No available rooms found for given type and dates.");
    } else {
        println!("Available rooms:");
        for room in &available {
            println!("{room}");
        }
    }
    Some(())
}

fn make_reservation(session: &mut HotelSession) -> Option<()> {
    println!("---- Make a Reservation ----");
    let guest_name = read_line("Enter guest name: ")?;
    if guest_name.is_empty() {
        println!("Name cannot be empty.");
        return Some(());
    }
    let guest_phone = read_line("Enter guest phone: ")?;

    let room_type = read_room_type()?;
    let check_in = read_date("Enter check-in date (yyyy-MM-dd): ")?;
    let check_out = read_date("Enter check-out date (yyyy-MM-dd): ")?;

    if check_out <= check_in {
        println!("Invalid dates. Check-out must be after check-in.");
        return Some(());
    }

    let available = session.available_rooms(room_type, check_in, check_out);
    if available.is_empty() {
        println!("No available rooms for selected type and dates.");
        return Some(());
    }

    println!("Available rooms of type {room_type}:");
    for room in &available {
        println!("{room}");
    }

    let room_id = read_u32("Enter room ID to book: ")?;
    let Some(room) = available.iter().find(|r| r.id == room_id) else {
        println!("Invalid room ID or room not available.");
        return Some(());
    };

    let nights = (check_out - check_in).num_days();
    println!("---- Payment ----");
    println!("Total amount: {:.2}", nights as f64 * room.price_per_night);
    let payment_method = read_line("Enter payment method (Card/UPI/Cash): ")?;
    let payment_reference = read_line("Enter transaction reference: ")?;

    let request = BookingRequest {
        guest_name,
        guest_phone,
        room_type,
        check_in,
        check_out,
        room_id,
        payment_method,
        payment_reference,
    };
    match session.book(&request) {
        Ok(committed) => {
            println!("Reservation successful!");
            println!("Your Reservation ID: {}", committed.value.reservation_id);
            if let Some(e) = committed.save_error {
                println!("Warning: reservation is held in memory but could not be saved: {e}");
            }
        }
        Err(e) => println!("Reservation failed: {e}"),
    }
    Some(())
}

fn cancel_reservation(session: &mut HotelSession) -> Option<()> {
    println!("---- Cancel Reservation ----");
    let id = read_line("Enter Reservation ID: ")?;

    match session.reservation(&id) {
        None => {
            println!("Reservation not found.");
            return Some(());
        }
        Some(r) if r.is_cancelled() => {
            println!("Reservation is already cancelled.");
            return Some(());
        }
        Some(r) => {
            println!("Found reservation:");
            println!("{r}");
        }
    }

    if !read_yes_no("Are you sure you want to cancel? (y/n): ")? {
        println!("Cancellation aborted.");
        return Some(());
    }

    let committed = session.cancel(&id);
    match committed.value {
        CancelOutcome::Cancelled(_) => println!("Reservation cancelled successfully."),
        CancelOutcome::AlreadyCancelled(_) => println!("Reservation is already cancelled."),
        CancelOutcome::NotFound => println!("Reservation not found."),
    }
    if let Some(e) = committed.save_error {
        println!("Warning: cancellation is held in memory but could not be saved: {e}");
    }
    Some(())
}

fn view_reservation_details(session: &HotelSession) -> Option<()> {
    println!("---- View Reservation Details ----");
    let id = read_line("Enter Reservation ID: ")?;
    match session.reservation(&id) {
        Some(r) => {
            println!("Reservation details:");
            println!("{r}");
        }
        None => println!("Reservation not found."),
    }
    Some(())
}

fn list_all_reservations(session: &HotelSession) {
    println!("---- All Reservations ----");
    if session.reservations().is_empty() {
        println!("No reservations found.");
        return;
    }
    for reservation in session.reservations() {
        println!("{reservation}");
    }
}

fn list_all_rooms(session: &HotelSession) {
    println!("---- All Rooms ----");
    for room in session.rooms() {
        println!("{room}");
    }
}

// ---- input helpers ----
// Each helper re-prompts until it gets a usable value and returns None only
// on end of input, which unwinds to the final save in main.

fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    io::stdout().flush().ok();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn read_u32(prompt: &str) -> Option<u32> {
    loop {
        let line = read_line(prompt)?;
        match line.parse::<u32>() {
            Ok(n) => return Some(n),
            Err(_) => println!("Please enter a valid number."),
        }
    }
}

fn read_date(prompt: &str) -> Option<NaiveDate> {
    loop {
        let line = read_line(prompt)?;
        match NaiveDate::parse_from_str(&line, "%Y-%m-%d") {
            Ok(date) => return Some(date),
            Err(_) => println!("Invalid date format. Please use yyyy-MM-dd."),
        }
    }
}

fn read_room_type() -> Option<RoomType> {
    loop {
        println!("Select room type:");
        println!("1. STANDARD");
        println!("2. DELUXE");
        println!("3. SUITE");
        match read_u32("Enter choice: ")? {
            1 => return Some(RoomType::Standard),
            2 => return Some(RoomType::Deluxe),
            3 => return Some(RoomType::Suite),
            _ => println!("Invalid choice, please try again."),
        }
    }
}

fn read_yes_no(prompt: &str) -> Option<bool> {
    let answer = read_line(prompt)?.to_lowercase();
    Some(answer == "y" || answer == "yes")
}
