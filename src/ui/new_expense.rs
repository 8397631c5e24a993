// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Outcome;
use crate::models::{Category, DEFAULT_CURRENCY};
use crate::store::Store;
use crate::ui::prompt::Prompt;
use anyhow::Result;
use chrono::NaiveDate;

/// The new-expense form: edits land in the store's draft field by field, so
/// navigating away and back keeps whatever was already entered. Only a
/// successful save resets the draft.
pub fn show(store: &mut Store, prompt: &mut dyn Prompt) -> Result<Outcome> {
    render(store);

    let Some(line) = prompt.input("Command", None)? else {
        return Ok(Outcome::Quit);
    };
    match line.trim() {
        "t" => {
            if let Some(name) = non_empty(prompt.input("Title", Some(&store.draft().name))?) {
                store.set_draft_name(&name);
            }
        }
        "m" => {
            if let Some(amount) = non_empty(prompt.input("Amount", Some(&store.draft().amount))?) {
                store.set_draft_amount(&amount);
            }
        }
        "d" => {
            let current = store.draft().date.to_string();
            if let Some(raw) = non_empty(prompt.input("Date (YYYY-MM-DD)", Some(&current))?) {
                match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
                    Ok(date) => store.set_draft_date(date),
                    Err(_) => println!("Invalid date '{}', expected YYYY-MM-DD", raw),
                }
            }
        }
        "c" => pick_category(store, prompt)?,
        "y" => {
            let current = store.draft().currency.clone();
            if let Some(ccy) = non_empty(prompt.input("Paid in currency", Some(&current))?) {
                store.set_draft_currency(&ccy);
            }
        }
        "s" => {
            if !store.add_expense() {
                println!("A title and a numeric amount are required.");
            }
        }
        "x" => store.cancel_new_expense(),
        "q" => return Ok(Outcome::Quit),
        "" => {}
        other => println!("Unknown command: {}", other),
    }
    Ok(Outcome::Continue)
}

fn pick_category(store: &mut Store, prompt: &mut dyn Prompt) -> Result<()> {
    for (i, category) in Category::SELECTABLE.iter().enumerate() {
        println!("  {}. {}", i + 1, category);
    }
    let current = store.draft().category.to_string();
    if let Some(raw) = non_empty(prompt.input("Category (1-6)", Some(&current))?) {
        match raw.trim().parse::<usize>() {
            Ok(n) if (1..=Category::SELECTABLE.len()).contains(&n) => {
                store.set_draft_category(Category::SELECTABLE[n - 1]);
            }
            _ => println!("Pick a number between 1 and {}", Category::SELECTABLE.len()),
        }
    }
    Ok(())
}

fn non_empty(reply: Option<String>) -> Option<String> {
    reply.filter(|s| !s.trim().is_empty())
}

/// Static display hint shown next to the amount, not a computed conversion.
pub fn rate_hint(trip_ccy: &str, draft_ccy: &str) -> String {
    format!("{} = {} 1.00", trip_ccy, draft_ccy)
}

fn render(store: &Store) {
    let draft = store.draft();
    let trip_ccy = store
        .selected_trip()
        .map(|t| t.currency.clone())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    println!();
    println!("New Entry");
    println!(
        "  Title:    {}",
        if draft.name.is_empty() { "—" } else { &draft.name }
    );
    println!(
        "  Amount:   {} {}",
        if draft.amount.is_empty() { "0.00" } else { &draft.amount },
        draft.currency
    );
    println!("            {}", rate_hint(&trip_ccy, &draft.currency));
    println!("  Date:     {}", draft.date);
    println!("  Category: {}", draft.category);
    println!("t title · m amount · d date · c category · y currency · s save · x cancel · q quit");
}
