// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{Outcome, fmt_money, format_day, parse_id, pretty_table, trips_list};
use crate::stats::{category_style, group_by_date};
use crate::store::Store;
use crate::ui::prompt::Prompt;
use anyhow::Result;

pub fn show(store: &mut Store, prompt: &mut dyn Prompt) -> Result<Outcome> {
    // Selection can only be empty when the persisted trip list was itself
    // empty; the list screen is the sensible place to be then.
    let Some(trip) = store.selected_trip().cloned() else {
        println!("No trips yet.");
        store.show_trips_list();
        return Ok(Outcome::Continue);
    };
    render(store, &trip);

    let Some(line) = prompt.input("Command", None)? else {
        return Ok(Outcome::Quit);
    };
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("b"), _) => store.show_trips_list(),
        (Some("n"), _) => store.start_new_expense(),
        (Some("d"), arg) => {
            if let Some(id) = parse_id(arg) {
                if !store.delete_expense(trip.id, id) {
                    println!("No expense with id {}", id);
                }
            }
        }
        (Some("r"), arg) => {
            if let Some(id) = parse_id(arg) {
                rename(store, prompt, trip.id, id)?;
            }
        }
        // The trip itself is editable from its own detail view too. Deleting
        // it falls back to the list screen via the store.
        (Some("R"), _) => trips_list::rename(store, prompt, trip.id)?,
        (Some("D"), _) => trips_list::delete(store, prompt, trip.id)?,
        (Some("q"), _) => return Ok(Outcome::Quit),
        (None, _) => {}
        _ => println!("Unknown command: {}", line),
    }
    Ok(Outcome::Continue)
}

fn rename(store: &mut Store, prompt: &mut dyn Prompt, trip_id: i64, expense_id: i64) -> Result<()> {
    let Some(current) = store
        .expenses_for(trip_id)
        .iter()
        .find(|e| e.id == expense_id)
        .map(|e| e.name.clone())
    else {
        println!("No expense with id {}", expense_id);
        return Ok(());
    };
    if let Some(name) = prompt.input("Edit expense name", Some(&current))? {
        store.rename_expense(trip_id, expense_id, &name);
    }
    Ok(())
}

fn render(store: &Store, trip: &crate::models::Trip) {
    println!();
    println!("{}", trip.name);
    println!(
        "Total: {}    Daily Average: {}",
        fmt_money(&trip.total, &trip.currency),
        fmt_money(&trip.daily_avg, &trip.currency)
    );

    for group in group_by_date(store.expenses_for(trip.id)) {
        let day = format_day(group.date);
        let rows = group
            .expenses
            .iter()
            .map(|e| {
                let style = category_style(e.category);
                // The original-currency column only shows when the entry was
                // paid in something other than the trip currency.
                let original = if e.original_currency != e.currency {
                    format!("{} {}", e.original_currency, e.original_amount.round_dp(2))
                } else {
                    String::new()
                };
                vec![
                    e.id.to_string(),
                    format!("{} {}", style.glyph, e.category),
                    e.name.clone(),
                    e.amount.round_dp(2).to_string(),
                    original,
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&[day.as_str(), "Category", "Name", "Amount", "Paid"], rows)
        );
    }
    println!(
        "b back · n new expense · r <id> rename · d <id> delete · R rename trip · D delete trip · q quit"
    );
}
