//! Tests for Hotel
//!
//! These tests verify:
//! - Command routing through `execute`
//! - Show-rooms sorts the store in place
//! - Save / load / autosave lifecycle
//! - Failed loads leave the store untouched

use std::fs;

use chrono::NaiveDate;
use innkeep::config::Config;
use innkeep::{
    BookingDate, BookingRequest, Command, Hotel, HotelError, Response, Room, RoomUpdate,
};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn setup_temp_hotel() -> (TempDir, Hotel) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_file(temp_dir.path().join("hotel_data.csv"))
        .report_timing(false)
        .build();
    let hotel = Hotel::open(config).unwrap();
    (temp_dir, hotel)
}

fn ids(hotel: &Hotel) -> Vec<i32> {
    hotel.rooms().iter().map(|room| room.id).collect()
}

fn allocate(hotel: &mut Hotel, id: i32, room_type: &str) {
    let response = hotel
        .execute(Command::Allocate {
            id,
            room_type: room_type.to_string(),
        })
        .unwrap();
    assert_eq!(response, Response::Done);
}

// =============================================================================
// Command Tests
// =============================================================================

#[test]
fn test_scenario_through_commands() {
    let (_temp, mut hotel) = setup_temp_hotel();
    allocate(&mut hotel, 101, "Single");
    allocate(&mut hotel, 102, "Double");

    hotel
        .execute(Command::Book {
            id: 101,
            request: BookingRequest::new("Alice", ymd(2024, 5, 1)),
        })
        .unwrap();

    let available = hotel.execute(Command::ShowAvailable).unwrap();
    assert_eq!(available, Response::Rooms(vec![Room::new(102, "Double")]));

    match hotel.execute(Command::Search { id: 101 }).unwrap() {
        Response::Room(room) => {
            assert!(!room.available);
            assert_eq!(room.booking_date, BookingDate::on(ymd(2024, 5, 1)));
        }
        other => panic!("unexpected response: {:?}", other),
    }

    match hotel.execute(Command::ShowRooms).unwrap() {
        Response::Rooms(rooms) => {
            let order: Vec<i32> = rooms.iter().map(|room| room.id).collect();
            assert_eq!(order, vec![102, 101]);
        }
        other => panic!("unexpected response: {:?}", other),
    }

    // The store itself was reordered
    assert_eq!(ids(&hotel), vec![102, 101]);
}

#[test]
fn test_errors_surface_from_execute() {
    let (_temp, mut hotel) = setup_temp_hotel();
    allocate(&mut hotel, 1, "Single");

    let duplicate = hotel.execute(Command::Allocate {
        id: 1,
        room_type: "Double".to_string(),
    });
    assert!(matches!(duplicate, Err(HotelError::DuplicateId(1))));

    let missing = hotel.execute(Command::Search { id: 2 });
    assert!(matches!(missing, Err(HotelError::NotFound(2))));

    hotel
        .execute(Command::Book {
            id: 1,
            request: BookingRequest::new("Alice", ymd(2024, 5, 1)),
        })
        .unwrap();
    let rebook = hotel.execute(Command::Book {
        id: 1,
        request: BookingRequest::new("Bob", ymd(2024, 5, 2)),
    });
    assert!(matches!(rebook, Err(HotelError::AlreadyBooked(1))));
}

#[test]
fn test_update_and_delete_commands() {
    let (_temp, mut hotel) = setup_temp_hotel();
    allocate(&mut hotel, 1, "Single");
    allocate(&mut hotel, 2, "Double");

    hotel
        .execute(Command::Update {
            id: 1,
            update: RoomUpdate {
                new_id: 10,
                room_type: "Suite".to_string(),
                booking: None,
            },
        })
        .unwrap();
    assert_eq!(ids(&hotel), vec![10, 2]);

    match hotel.execute(Command::Delete { id: 10 }).unwrap() {
        Response::Deleted(room) => assert_eq!(room.room_type, "Suite"),
        other => panic!("unexpected response: {:?}", other),
    }
    assert_eq!(ids(&hotel), vec![2]);
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_save_then_load_replaces_store() {
    let (_temp, mut hotel) = setup_temp_hotel();
    allocate(&mut hotel, 1, "Single");
    allocate(&mut hotel, 2, "Double");
    hotel
        .book(2, BookingRequest::new("Carol", ymd(2024, 8, 9)))
        .unwrap();

    assert_eq!(
        hotel.execute(Command::Save).unwrap(),
        Response::Saved { rooms: 2 }
    );
    let saved: Vec<Room> = hotel.rooms().iter().cloned().collect();

    hotel.delete(1).unwrap();
    allocate(&mut hotel, 3, "Twin");

    assert_eq!(
        hotel.execute(Command::Load).unwrap(),
        Response::Loaded { rooms: 2 }
    );
    assert_eq!(hotel.rooms().iter().cloned().collect::<Vec<_>>(), saved);
}

#[test]
fn test_load_without_file_reports_no_data() {
    let (_temp, mut hotel) = setup_temp_hotel();
    allocate(&mut hotel, 1, "Single");

    assert_eq!(hotel.execute(Command::Load).unwrap(), Response::NoData);
    assert_eq!(ids(&hotel), vec![1]);
}

#[test]
fn test_failed_load_keeps_store() {
    let (_temp, mut hotel) = setup_temp_hotel();
    allocate(&mut hotel, 1, "Single");

    fs::write(
        &hotel.config().data_file,
        "Id,Date,Name,RoomType,IsAvailable\n5,not-a-date,,Single,true\n",
    )
    .unwrap();

    let result = hotel.execute(Command::Load);
    assert!(matches!(result, Err(HotelError::PersistenceFailure(_))));
    assert_eq!(ids(&hotel), vec![1]);
}

#[test]
fn test_exit_autosaves() {
    let (temp, mut hotel) = setup_temp_hotel();
    allocate(&mut hotel, 4, "Single");

    assert_eq!(
        hotel.execute(Command::Exit).unwrap(),
        Response::Exited { saved: Some(1) }
    );

    let text = fs::read_to_string(temp.path().join("hotel_data.csv")).unwrap();
    assert_eq!(
        text,
        "Id,Date,Name,RoomType,IsAvailable\n4,Not Booked,,Single,true\n"
    );
}

#[test]
fn test_close_without_autosave_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("hotel_data.csv");
    let config = Config::builder()
        .data_file(&path)
        .autosave_on_exit(false)
        .build();
    let mut hotel = Hotel::open(config).unwrap();
    hotel.allocate(1, "Single").unwrap();

    assert_eq!(hotel.close().unwrap(), None);
    assert!(!path.exists());
}

#[test]
fn test_open_with_load_on_start() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("hotel_data.csv");

    let config = Config::builder().data_file(&path).build();
    let mut first = Hotel::open(config.clone()).unwrap();
    first.allocate(7, "Double").unwrap();
    first.allocate(8, "Single").unwrap();
    assert_eq!(first.close().unwrap(), Some(2));

    let reopened = Config::builder()
        .data_file(&path)
        .load_on_start(true)
        .build();
    let second = Hotel::open(reopened).unwrap();
    assert_eq!(ids(&second), vec![7, 8]);
}

#[test]
fn test_open_with_load_on_start_and_no_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_file(temp_dir.path().join("absent.csv"))
        .load_on_start(true)
        .build();

    let hotel = Hotel::open(config).unwrap();
    assert!(hotel.rooms().is_empty());
}
