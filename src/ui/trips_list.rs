// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{Outcome, fmt_money, parse_id, pretty_table};
use crate::models::DEFAULT_TRIP_NAME;
use crate::store::{Store, StoreError};
use crate::ui::prompt::Prompt;
use anyhow::Result;

pub fn show(store: &mut Store, prompt: &mut dyn Prompt) -> Result<Outcome> {
    render(store);

    let Some(line) = prompt.input("Command", None)? else {
        return Ok(Outcome::Quit);
    };
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("o"), arg) => {
            if let Some(id) = parse_id(arg) {
                if store.open_trip(id).is_err() {
                    println!("No trip with id {}", id);
                }
            }
        }
        (Some("a"), _) => {
            let name = prompt.input("Trip name", Some(DEFAULT_TRIP_NAME))?;
            store.add_trip(name.as_deref());
        }
        (Some("r"), arg) => {
            if let Some(id) = parse_id(arg) {
                rename(store, prompt, id)?;
            }
        }
        (Some("d"), arg) => {
            if let Some(id) = parse_id(arg) {
                delete(store, prompt, id)?;
            }
        }
        (Some("q"), _) => return Ok(Outcome::Quit),
        (None, _) => {}
        _ => println!("Unknown command: {}", line),
    }
    Ok(Outcome::Continue)
}

pub(super) fn rename(store: &mut Store, prompt: &mut dyn Prompt, id: i64) -> Result<()> {
    let Some(current) = store.trip(id).map(|t| t.name.clone()) else {
        println!("No trip with id {}", id);
        return Ok(());
    };
    // Cancelled or empty replies leave the name untouched.
    if let Some(name) = prompt.input("Edit trip name", Some(&current))? {
        store.rename_trip(id, &name);
    }
    Ok(())
}

pub(super) fn delete(store: &mut Store, prompt: &mut dyn Prompt, id: i64) -> Result<()> {
    if store.trip(id).is_none() {
        println!("No trip with id {}", id);
        return Ok(());
    }
    // The only trip is never deletable; warn before asking anything.
    if store.trips().len() <= 1 {
        println!("{}", StoreError::OnlyTrip);
        return Ok(());
    }
    if prompt.confirm("Are you sure you want to delete this trip and all its expenses?")? {
        if let Err(e) = store.delete_trip(id) {
            println!("{}", e);
        }
    }
    Ok(())
}

fn render(store: &Store) {
    println!();
    println!("My Trips");
    let rows = store
        .trips()
        .iter()
        .map(|t| {
            vec![
                t.id.to_string(),
                t.name.clone(),
                fmt_money(&t.total, &t.currency),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["ID", "Trip", "Total"], rows));
    println!("o <id> open · a add · r <id> rename · d <id> delete · q quit");
}
