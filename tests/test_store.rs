use pinnote::application::{visible_notes, NoteStore};
use pinnote::domain::Label;
use pinnote::util::testing::{store_with_pins, store_with_titles};

#[test]
fn given_seeded_store_when_running_full_scenario_then_each_step_holds() {
    // Arrange: the collection every session starts with
    let mut store = NoteStore::seeded();
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(1).expect("seed should exist").id, 1);

    // Act & Assert: add a labeled note, which gets the next id
    let id = store
        .add("A", "B", vec![Label::Urgent])
        .expect("add should succeed")
        .id;
    assert_eq!(id, 2);
    assert_eq!(store.len(), 2);

    // Delete the seed; only the new note remains
    store.delete(1);
    assert_eq!(store.len(), 1);
    assert!(store.get(1).is_none());
    assert!(store.get(2).is_some());

    // Pin the survivor
    store.toggle_pin(2);
    assert!(store.get(2).expect("note should exist").pinned);

    // "a" matches the urgent label, so the note stays visible
    let visible = visible_notes(store.notes(), "a");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 2);
}

#[test]
fn given_many_adds_when_collecting_ids_then_unique_and_increasing() {
    // Arrange
    let mut store = NoteStore::new();

    // Act
    let ids: Vec<u64> = (0..10)
        .map(|i| {
            store
                .add(&format!("note {i}"), "", vec![])
                .expect("add should succeed")
                .id
        })
        .collect();

    // Assert
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn given_blank_add_between_real_adds_then_ids_are_not_consumed() {
    // Arrange
    let mut store = NoteStore::new();
    store.add("first", "", vec![]);

    // Act
    assert!(store.add(" ", "  ", vec![]).is_none());
    let id = store.add("second", "", vec![]).expect("add should succeed").id;

    // Assert
    assert_eq!(id, 2);
}

#[test]
fn given_cap_reached_when_unpinning_and_repinning_then_cap_frees_up() {
    // Arrange
    let mut store = store_with_pins(4, &[1, 2, 3]);

    // Act: cap blocks the fourth pin
    store.toggle_pin(4);
    assert!(!store.get(4).unwrap().pinned);

    // Unpinning always works, freeing a slot
    store.toggle_pin(1);
    store.toggle_pin(4);

    // Assert
    assert!(store.get(4).unwrap().pinned);
    assert_eq!(store.pinned_count(), 3);
}

#[test]
fn given_mixed_pins_when_projecting_then_pinned_first_insertion_order_within() {
    // Arrange
    let store = store_with_pins(5, &[2, 5]);

    // Act
    let ids: Vec<u64> = visible_notes(store.notes(), "").iter().map(|n| n.id).collect();

    // Assert
    assert_eq!(ids, vec![2, 5, 1, 3, 4]);
}

#[test]
fn given_projection_when_called_then_underlying_collection_is_untouched() {
    // Arrange
    let store = store_with_titles(&["z", "y", "x"]);

    // Act
    let _ = visible_notes(store.notes(), "y");
    let _ = visible_notes(store.notes(), "y");

    // Assert: original insertion order preserved in the store itself
    let ids: Vec<u64> = store.notes().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}
