// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use std::fs;
use tempfile::TempDir;
use tripclip::storage::Snapshots;
use tripclip::store::{Screen, Store, StoreError};

fn seeded(trips: &str, expenses: &str, selected: &str) -> (TempDir, Store) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("trips.json"), trips).unwrap();
    fs::write(dir.path().join("expenses.json"), expenses).unwrap();
    fs::write(dir.path().join("selectedTripId.json"), selected).unwrap();
    let store = Store::load(Snapshots::open_at(dir.path()).unwrap());
    (dir, store)
}

fn one_empty_trip() -> (TempDir, Store) {
    seeded(
        r#"[{"id":1,"name":"Guatemala","total":0,"dailyAvg":0,"currency":"ILS"}]"#,
        r#"{"1":[]}"#,
        "1",
    )
}

fn two_trips() -> (TempDir, Store) {
    seeded(
        r#"[{"id":1,"name":"Guatemala","total":0,"dailyAvg":0,"currency":"ILS"},
            {"id":2,"name":"Sicily","total":0,"dailyAvg":0,"currency":"ILS"}]"#,
        r#"{"1":[],"2":[]}"#,
        "2",
    )
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn initial_screen_is_trip_detail() {
    let (_dir, store) = one_empty_trip();
    assert_eq!(store.screen(), Screen::TripDetail);
    assert_eq!(store.selected_id(), Some(1));
}

#[test]
fn adding_expense_updates_trip_totals() {
    let (_dir, mut store) = one_empty_trip();
    store.set_draft_name("Lunch");
    store.set_draft_amount("24.76");
    assert!(store.add_expense());

    let trip = store.trip(1).unwrap();
    assert_eq!(trip.total, dec("24.76"));
    assert_eq!(trip.daily_avg, dec("24.76"));
    assert_eq!(store.expenses_for(1).len(), 1);
    assert_eq!(store.screen(), Screen::TripDetail);
}

#[test]
fn saved_expense_mirrors_trip_currency_and_resets_draft() {
    let (_dir, mut store) = one_empty_trip();
    store.set_draft_name("Lunch");
    store.set_draft_amount("24.76");
    store.set_draft_currency("GTQ");
    assert!(store.add_expense());

    let expense = &store.expenses_for(1)[0];
    assert_eq!(expense.currency, "ILS");
    assert_eq!(expense.original_currency, "GTQ");
    assert_eq!(expense.original_amount, dec("24.76"));
    assert!(store.draft().name.is_empty());
    assert!(store.draft().amount.is_empty());
}

#[test]
fn empty_name_or_bad_amount_is_a_no_op() {
    let (_dir, mut store) = one_empty_trip();

    store.set_draft_name("   ");
    store.set_draft_amount("24.76");
    assert!(!store.add_expense());

    store.set_draft_name("Lunch");
    store.set_draft_amount("24.7x");
    assert!(!store.add_expense());

    assert!(store.expenses_for(1).is_empty());
    assert_eq!(store.trip(1).unwrap().total, Decimal::ZERO);
}

#[test]
fn deleting_expense_recomputes_totals() {
    let (_dir, mut store) = one_empty_trip();
    store.set_draft_name("A");
    store.set_draft_amount("40.00");
    assert!(store.add_expense());
    store.set_draft_name("B");
    store.set_draft_amount("60.00");
    assert!(store.add_expense());
    assert_eq!(store.trip(1).unwrap().total, dec("100.00"));

    assert!(store.delete_expense(1, 1));

    let trip = store.trip(1).unwrap();
    assert_eq!(trip.total, dec("60.00"));
    assert_eq!(trip.daily_avg, dec("60.00"));
}

#[test]
fn expense_ids_do_not_collide_after_deletion() {
    let (_dir, mut store) = one_empty_trip();
    for (name, amount) in [("A", "1.00"), ("B", "2.00")] {
        store.set_draft_name(name);
        store.set_draft_amount(amount);
        assert!(store.add_expense());
    }
    assert!(store.delete_expense(1, 1));

    store.set_draft_name("C");
    store.set_draft_amount("3.00");
    assert!(store.add_expense());

    let ids: Vec<i64> = store.expenses_for(1).iter().map(|e| e.id).collect();
    assert_eq!(ids, [2, 3]);
}

#[test]
fn rename_expense_trims_and_rejects_empty() {
    let (_dir, mut store) = one_empty_trip();
    store.set_draft_name("Lunch");
    store.set_draft_amount("5.00");
    assert!(store.add_expense());

    assert!(!store.rename_expense(1, 1, "   "));
    assert_eq!(store.expenses_for(1)[0].name, "Lunch");

    assert!(store.rename_expense(1, 1, "  Dinner "));
    assert_eq!(store.expenses_for(1)[0].name, "Dinner");
    // Totals untouched by a rename.
    assert_eq!(store.trip(1).unwrap().total, dec("5.00"));
}

#[test]
fn add_trip_assigns_next_id_and_selects_it() {
    let (_dir, mut store) = two_trips();
    let id = store.add_trip(Some("Iceland"));
    assert_eq!(id, 3);
    assert_eq!(store.trip(3).unwrap().name, "Iceland");
    assert_eq!(store.selected_id(), Some(3));
    assert_eq!(store.screen(), Screen::TripDetail);
    assert!(store.expenses_for(3).is_empty());
}

#[test]
fn add_trip_with_blank_name_uses_default() {
    let (_dir, mut store) = two_trips();
    let id = store.add_trip(Some("   "));
    assert_eq!(store.trip(id).unwrap().name, "New Trip");
    let id = store.add_trip(None);
    assert_eq!(store.trip(id).unwrap().name, "New Trip");
}

#[test]
fn deleting_only_trip_is_refused() {
    let (_dir, mut store) = one_empty_trip();
    assert_eq!(store.delete_trip(1), Err(StoreError::OnlyTrip));
    assert_eq!(store.trips().len(), 1);
}

#[test]
fn deleting_trip_cascades_to_its_expenses() {
    let (_dir, mut store) = two_trips();
    store.set_draft_name("Lunch");
    store.set_draft_amount("10.00");
    assert!(store.add_expense()); // lands on selected trip 2

    store.delete_trip(2).unwrap();
    assert!(store.trip(2).is_none());
    assert!(store.expenses_for(2).is_empty());
}

#[test]
fn deleting_selected_trip_moves_selection_and_screen() {
    let (_dir, mut store) = two_trips();
    assert_eq!(store.selected_id(), Some(2));
    assert_eq!(store.screen(), Screen::TripDetail);

    store.delete_trip(2).unwrap();

    assert_eq!(store.selected_id(), Some(1));
    assert_eq!(store.screen(), Screen::TripsList);
}

#[test]
fn deleting_unselected_trip_keeps_selection_and_screen() {
    let (_dir, mut store) = two_trips();
    store.delete_trip(1).unwrap();
    assert_eq!(store.selected_id(), Some(2));
    assert_eq!(store.screen(), Screen::TripDetail);
}

#[test]
fn rename_trip_trims_and_rejects_empty() {
    let (_dir, mut store) = two_trips();
    assert!(!store.rename_trip(1, "  "));
    assert_eq!(store.trip(1).unwrap().name, "Guatemala");
    assert!(store.rename_trip(1, " Belize "));
    assert_eq!(store.trip(1).unwrap().name, "Belize");
}

#[test]
fn open_trip_rejects_unknown_id() {
    let (_dir, mut store) = two_trips();
    assert_eq!(store.open_trip(9), Err(StoreError::UnknownTrip(9)));
    assert_eq!(store.selected_id(), Some(2));
}
