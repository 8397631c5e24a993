// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The application state store: trips, expenses-by-trip, the selected trip,
//! the new-expense draft, and the active screen. All mutation goes through
//! the named operations below; each one commits in memory first and then
//! mirrors the touched pieces to the snapshot store best-effort.

use crate::models::{DEFAULT_TRIP_NAME, Draft, Expense, Trip};
use crate::samples;
use crate::stats;
use crate::storage::{EXPENSES_KEY, SELECTED_TRIP_KEY, Snapshots, TRIPS_KEY};
use chrono::{Local, NaiveDate};
use log::warn;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use thiserror::Error;

/// The three mutually exclusive top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    TripsList,
    TripDetail,
    NewExpense,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("You cannot delete the only trip. Please create a new trip first.")]
    OnlyTrip,
    #[error("No trip with id {0}")]
    UnknownTrip(i64),
}

pub struct Store {
    snapshots: Snapshots,
    trips: Vec<Trip>,
    expenses: BTreeMap<i64, Vec<Expense>>,
    selected: Option<i64>,
    draft: Draft,
    screen: Screen,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl Store {
    /// Loads each snapshot entry independently, substituting the built-in
    /// samples for any entry that is absent or unreadable, then resolves the
    /// selection: persisted id if it still exists, else the first trip, else
    /// none. The initial screen is the trip detail so returning users land
    /// on their last context.
    pub fn load(snapshots: Snapshots) -> Self {
        let trips: Vec<Trip> = snapshots
            .load_json(TRIPS_KEY)
            .unwrap_or_else(samples::trips);

        let expenses = snapshots
            .load_json::<BTreeMap<String, Vec<Expense>>>(EXPENSES_KEY)
            .and_then(decode_expense_keys)
            .unwrap_or_else(samples::expenses);

        let persisted_id = snapshots
            .get(SELECTED_TRIP_KEY)
            .and_then(|s| s.trim().parse::<i64>().ok());
        let selected = persisted_id
            .filter(|id| trips.iter().any(|t| t.id == *id))
            .or_else(|| trips.first().map(|t| t.id));

        let mut store = Store {
            snapshots,
            trips,
            expenses,
            selected,
            draft: Draft::new(today()),
            screen: Screen::TripDetail,
        };
        store.reconcile();
        store
    }

    /// The trip list and the expense map must always cover the same id set.
    /// After per-entry fallbacks the two snapshots can disagree, so missing
    /// entries are created empty and orphaned entries dropped.
    fn reconcile(&mut self) {
        for trip in &self.trips {
            self.expenses.entry(trip.id).or_default();
        }
        let ids: Vec<i64> = self.trips.iter().map(|t| t.id).collect();
        self.expenses.retain(|id, _| ids.contains(id));
    }

    // Snapshot accessors.

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn trip(&self, id: i64) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == id)
    }

    pub fn expenses_for(&self, trip_id: i64) -> &[Expense] {
        self.expenses.get(&trip_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected
    }

    pub fn selected_trip(&self) -> Option<&Trip> {
        self.selected.and_then(|id| self.trip(id))
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    // Navigation.

    pub fn show_trips_list(&mut self) {
        self.screen = Screen::TripsList;
    }

    /// Selects an existing trip and shows its detail screen.
    pub fn open_trip(&mut self, id: i64) -> Result<(), StoreError> {
        if self.trip(id).is_none() {
            return Err(StoreError::UnknownTrip(id));
        }
        self.selected = Some(id);
        self.screen = Screen::TripDetail;
        self.persist_selected();
        Ok(())
    }

    pub fn start_new_expense(&mut self) {
        self.screen = Screen::NewExpense;
    }

    /// Leaves the new-expense screen without committing. The draft is kept;
    /// only a successful save resets it.
    pub fn cancel_new_expense(&mut self) {
        self.screen = Screen::TripDetail;
    }

    // Draft edits. Not persisted; the draft lives for the session only.

    pub fn set_draft_name(&mut self, name: &str) {
        self.draft.name = name.to_string();
    }

    pub fn set_draft_amount(&mut self, amount: &str) {
        self.draft.amount = amount.to_string();
    }

    pub fn set_draft_date(&mut self, date: NaiveDate) {
        self.draft.date = date;
    }

    pub fn set_draft_category(&mut self, category: crate::models::Category) {
        self.draft.category = category;
    }

    pub fn set_draft_currency(&mut self, currency: &str) {
        self.draft.currency = currency.to_string();
    }

    // Trip mutations.

    /// Creates a trip with the next id (max + 1), an empty expense list and
    /// zero totals, selects it and navigates to its detail screen. An empty
    /// or absent name falls back to the default.
    pub fn add_trip(&mut self, name: Option<&str>) -> i64 {
        let id = self.trips.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let name = match name.map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => DEFAULT_TRIP_NAME.to_string(),
        };
        self.trips.push(Trip::new(id, name));
        self.expenses.insert(id, Vec::new());
        self.selected = Some(id);
        self.screen = Screen::TripDetail;
        self.persist_trips();
        self.persist_expenses();
        self.persist_selected();
        id
    }

    /// Removes a trip and its whole expense list. Refused for the only trip.
    /// If the deleted trip was selected, selection falls back to the first
    /// remaining trip and the detail screen gives way to the list.
    pub fn delete_trip(&mut self, id: i64) -> Result<(), StoreError> {
        if self.trip(id).is_none() {
            return Err(StoreError::UnknownTrip(id));
        }
        if self.trips.len() == 1 {
            return Err(StoreError::OnlyTrip);
        }
        self.trips.retain(|t| t.id != id);
        self.expenses.remove(&id);
        if self.selected == Some(id) {
            self.selected = self.trips.first().map(|t| t.id);
            if self.screen == Screen::TripDetail {
                self.screen = Screen::TripsList;
            }
            self.persist_selected();
        }
        self.persist_trips();
        self.persist_expenses();
        Ok(())
    }

    /// Applies a new trip name; a name that trims to empty is a no-op.
    /// Returns whether the rename was applied.
    pub fn rename_trip(&mut self, id: i64, new_name: &str) -> bool {
        let name = new_name.trim();
        if name.is_empty() {
            return false;
        }
        match self.trips.iter_mut().find(|t| t.id == id) {
            Some(trip) => {
                trip.name = name.to_string();
                self.persist_trips();
                true
            }
            None => false,
        }
    }

    // Expense mutations.

    /// Commits the draft as an expense on the selected trip. A draft with an
    /// empty name or an unparsable amount, or the absence of a selection, is
    /// a local no-op (returns false). On success the trip's cached totals
    /// are recomputed, the draft resets and the detail screen shows.
    pub fn add_expense(&mut self) -> bool {
        let Some(trip_id) = self.selected else {
            return false;
        };
        let name = self.draft.name.trim();
        if name.is_empty() {
            return false;
        }
        let Ok(amount) = self.draft.amount.trim().parse::<Decimal>() else {
            return false;
        };
        let Some(currency) = self.trip(trip_id).map(|t| t.currency.clone()) else {
            return false;
        };

        let expense = Expense {
            id: next_expense_id(self.expenses_for(trip_id)),
            date: self.draft.date,
            name: name.to_string(),
            category: self.draft.category,
            amount,
            currency,
            original_amount: amount,
            original_currency: self.draft.currency.clone(),
        };
        self.expenses.entry(trip_id).or_default().push(expense);
        self.recompute_totals(trip_id);
        self.draft = Draft::new(today());
        self.screen = Screen::TripDetail;
        self.persist_expenses();
        self.persist_trips();
        true
    }

    /// Removes one expense and recomputes the trip's cached totals. Returns
    /// whether anything was removed.
    pub fn delete_expense(&mut self, trip_id: i64, expense_id: i64) -> bool {
        let Some(list) = self.expenses.get_mut(&trip_id) else {
            return false;
        };
        let before = list.len();
        list.retain(|e| e.id != expense_id);
        if list.len() == before {
            return false;
        }
        self.recompute_totals(trip_id);
        self.persist_expenses();
        self.persist_trips();
        true
    }

    /// Renames an expense in place; totals are untouched since the amount is
    /// unchanged. A name that trims to empty is a no-op.
    pub fn rename_expense(&mut self, trip_id: i64, expense_id: i64, new_name: &str) -> bool {
        let name = new_name.trim();
        if name.is_empty() {
            return false;
        }
        let Some(expense) = self
            .expenses
            .get_mut(&trip_id)
            .and_then(|list| list.iter_mut().find(|e| e.id == expense_id))
        else {
            return false;
        };
        expense.name = name.to_string();
        self.persist_expenses();
        true
    }

    fn recompute_totals(&mut self, trip_id: i64) {
        let stats = stats::trip_stats(self.expenses_for(trip_id));
        if let Some(trip) = self.trips.iter_mut().find(|t| t.id == trip_id) {
            trip.total = stats.total;
            trip.daily_avg = stats.daily_avg;
        }
    }

    // Best-effort persistence after each committed mutation. Failures are
    // logged inside the snapshot store; the next write re-sends the whole
    // entry anyway.

    fn persist_trips(&self) {
        self.snapshots.save_json(TRIPS_KEY, &self.trips);
    }

    fn persist_expenses(&self) {
        let by_key: BTreeMap<String, &Vec<Expense>> = self
            .expenses
            .iter()
            .map(|(id, list)| (id.to_string(), list))
            .collect();
        self.snapshots.save_json(EXPENSES_KEY, &by_key);
    }

    fn persist_selected(&self) {
        if let Some(id) = self.selected {
            self.snapshots.set(SELECTED_TRIP_KEY, &id.to_string());
        }
    }
}

/// Ids are per-trip and monotonic over the surviving entries: max + 1. The
/// product this replaces used count + 1, which collides with surviving ids
/// after a deletion.
fn next_expense_id(expenses: &[Expense]) -> i64 {
    expenses.iter().map(|e| e.id).max().unwrap_or(0) + 1
}

/// The persisted expense map is keyed by string-encoded trip ids. A key that
/// does not parse marks the whole entry malformed, which the caller treats
/// as missing.
fn decode_expense_keys(
    raw: BTreeMap<String, Vec<Expense>>,
) -> Option<BTreeMap<i64, Vec<Expense>>> {
    let mut map = BTreeMap::new();
    for (key, list) in raw {
        match key.parse::<i64>() {
            Ok(id) => {
                map.insert(id, list);
            }
            Err(_) => {
                warn!("snapshot 'expenses' has non-numeric trip id '{}'", key);
                return None;
            }
        }
    }
    Some(map)
}
