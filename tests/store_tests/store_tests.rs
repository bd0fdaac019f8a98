//! Record Store Tests
//!
//! Tests verify:
//! - Insert order and duplicate rejection
//! - Find / contains
//! - Update (id, type, occupied-only booking fields)
//! - Delete of head, middle and tail records
//! - Failed operations leave the store unchanged

use chrono::NaiveDate;
use innkeep::{BookingDate, BookingRequest, HotelError, Room, RoomStore, RoomUpdate};

// =============================================================================
// Helper Functions
// =============================================================================

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ids(store: &RoomStore) -> Vec<i32> {
    store.iter().map(|room| room.id).collect()
}

fn snapshot(store: &RoomStore) -> Vec<Room> {
    store.iter().cloned().collect()
}

fn store_with(ids: &[i32]) -> RoomStore {
    let mut store = RoomStore::new();
    for &id in ids {
        store.insert(id, "Single").unwrap();
    }
    store
}

// =============================================================================
// Insert Tests
// =============================================================================

#[test]
fn test_new_store_is_empty() {
    let store = RoomStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store.iter().count(), 0);
}

#[test]
fn test_insert_preserves_insertion_order() {
    let store = store_with(&[103, 101, 102]);

    assert_eq!(ids(&store), vec![103, 101, 102]);
    assert_eq!(store.len(), 3);
}

#[test]
fn test_insert_creates_vacant_room() {
    let mut store = RoomStore::new();
    store.insert(101, "Double").unwrap();

    let room = store.find(101).unwrap();
    assert_eq!(room, &Room::new(101, "Double"));
    assert!(room.available);
    assert_eq!(room.guest_name, None);
    assert_eq!(room.booking_date, BookingDate::NOT_BOOKED);
}

#[test]
fn test_insert_duplicate_fails_and_leaves_store() {
    let mut store = store_with(&[1, 2, 3]);
    let before = snapshot(&store);

    let result = store.insert(2, "Twin");

    assert!(matches!(result, Err(HotelError::DuplicateId(2))));
    assert_eq!(snapshot(&store), before);
}

#[test]
fn test_insert_many_keeps_ids_unique() {
    let mut store = RoomStore::new();
    for i in 0..200 {
        // Every id is attempted twice
        let id = i / 2;
        let _ = store.insert(id, "Single");
    }

    assert_eq!(store.len(), 100);
    let mut seen = ids(&store);
    seen.dedup();
    assert_eq!(seen.len(), 100);
}

// =============================================================================
// Find Tests
// =============================================================================

#[test]
fn test_find_missing() {
    let store = store_with(&[1, 2]);
    assert!(store.find(3).is_none());
    assert!(!store.contains(3));
    assert!(store.contains(2));
}

#[test]
fn test_find_on_empty_store() {
    let store = RoomStore::new();
    assert!(store.find(1).is_none());
}

// =============================================================================
// Update Tests
// =============================================================================

#[test]
fn test_update_id_and_type() {
    let mut store = store_with(&[1, 2, 3]);

    store
        .update(
            2,
            RoomUpdate {
                new_id: 20,
                room_type: "Twin".to_string(),
                booking: None,
            },
        )
        .unwrap();

    assert_eq!(ids(&store), vec![1, 20, 3]);
    assert!(store.find(2).is_none());
    assert_eq!(store.find(20).unwrap().room_type, "Twin");
}

#[test]
fn test_update_keeping_same_id() {
    let mut store = store_with(&[1, 2]);

    store
        .update(
            1,
            RoomUpdate {
                new_id: 1,
                room_type: "Suite".to_string(),
                booking: None,
            },
        )
        .unwrap();

    assert_eq!(store.find(1).unwrap().room_type, "Suite");
}

#[test]
fn test_update_missing_room() {
    let mut store = store_with(&[1]);

    let result = store.update(
        9,
        RoomUpdate {
            new_id: 10,
            room_type: "Twin".to_string(),
            booking: None,
        },
    );

    assert!(matches!(result, Err(HotelError::NotFound(9))));
}

#[test]
fn test_update_to_existing_id_fails_and_leaves_store() {
    let mut store = store_with(&[1, 2, 3]);
    let before = snapshot(&store);

    let result = store.update(
        1,
        RoomUpdate {
            new_id: 3,
            room_type: "Twin".to_string(),
            booking: None,
        },
    );

    assert!(matches!(result, Err(HotelError::DuplicateId(3))));
    assert_eq!(snapshot(&store), before);
}

#[test]
fn test_update_booking_fields_on_occupied_room() {
    let mut store = store_with(&[1]);
    store.book(1, BookingRequest::new("Alice", ymd(2024, 5, 1))).unwrap();

    store
        .update(
            1,
            RoomUpdate {
                new_id: 1,
                room_type: "Single".to_string(),
                booking: Some(BookingRequest::new("Bob", ymd(2024, 6, 2))),
            },
        )
        .unwrap();

    let room = store.find(1).unwrap();
    assert!(!room.available);
    assert_eq!(room.guest_name.as_deref(), Some("Bob"));
    assert_eq!(room.booking_date, BookingDate::on(ymd(2024, 6, 2)));
}

#[test]
fn test_update_never_books_vacant_room() {
    let mut store = store_with(&[1]);

    store
        .update(
            1,
            RoomUpdate {
                new_id: 5,
                room_type: "Double".to_string(),
                booking: Some(BookingRequest::new("Mallory", ymd(2024, 6, 2))),
            },
        )
        .unwrap();

    let room = store.find(5).unwrap();
    assert!(room.available);
    assert_eq!(room.guest_name, None);
    assert_eq!(room.booking_date, BookingDate::NOT_BOOKED);
    assert_eq!(room.room_type, "Double");
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_head_promotes_next() {
    let mut store = store_with(&[1, 2, 3]);

    let removed = store.delete(1).unwrap();

    assert_eq!(removed.id, 1);
    assert_eq!(ids(&store), vec![2, 3]);
    assert!(store.find(1).is_none());
}

#[test]
fn test_delete_middle_and_tail() {
    let mut store = store_with(&[1, 2, 3, 4]);

    store.delete(3).unwrap();
    assert_eq!(ids(&store), vec![1, 2, 4]);

    store.delete(4).unwrap();
    assert_eq!(ids(&store), vec![1, 2]);

    // Tail is walked fresh, so appends still land at the end
    store.insert(5, "Twin").unwrap();
    assert_eq!(ids(&store), vec![1, 2, 5]);
}

#[test]
fn test_delete_only_room() {
    let mut store = store_with(&[7]);
    store.delete(7).unwrap();

    assert!(store.is_empty());
    assert_eq!(store.len(), 0);

    store.insert(8, "Single").unwrap();
    assert_eq!(ids(&store), vec![8]);
}

#[test]
fn test_delete_missing() {
    let mut store = store_with(&[1, 2]);
    let before = snapshot(&store);

    assert!(matches!(store.delete(9), Err(HotelError::NotFound(9))));
    assert_eq!(snapshot(&store), before);

    let mut empty = RoomStore::new();
    assert!(matches!(empty.delete(1), Err(HotelError::NotFound(1))));
}

#[test]
fn test_delete_then_reinsert_same_id() {
    let mut store = store_with(&[1, 2, 3]);
    store.delete(2).unwrap();
    store.insert(2, "Suite").unwrap();

    assert_eq!(ids(&store), vec![1, 3, 2]);
    assert_eq!(store.find(2).unwrap().room_type, "Suite");
    assert_eq!(store.len(), 3);
}

// =============================================================================
// Bulk Replace Tests
// =============================================================================

#[test]
fn test_replace_all_discards_previous_rooms() {
    let mut store = store_with(&[1, 2, 3]);

    store
        .replace_all(vec![Room::new(9, "Twin"), Room::new(8, "Single")])
        .unwrap();

    assert_eq!(ids(&store), vec![9, 8]);
    assert!(store.find(1).is_none());
}

#[test]
fn test_replace_all_rejects_duplicates_atomically() {
    let mut store = store_with(&[1, 2]);
    let before = snapshot(&store);

    let result = store.replace_all(vec![Room::new(5, "A"), Room::new(5, "B")]);

    assert!(matches!(result, Err(HotelError::DuplicateId(5))));
    assert_eq!(snapshot(&store), before);
}

#[test]
fn test_from_rooms_and_clear() {
    let mut store = RoomStore::from_rooms(vec![Room::new(1, "A"), Room::new(2, "B")]).unwrap();
    assert_eq!(ids(&store), vec![1, 2]);

    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.iter().count(), 0);
}
