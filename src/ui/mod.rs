// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The screen loop. One of three mutually exclusive screens renders per
//! iteration and handles exactly one command; every state change goes
//! through the store's named operations.

pub mod new_expense;
pub mod prompt;
pub mod trip_detail;
pub mod trips_list;

use crate::store::{Screen, Store};
use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use prompt::Prompt;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

pub fn run(store: &mut Store, prompt: &mut dyn Prompt) -> Result<()> {
    loop {
        let outcome = match store.screen() {
            Screen::TripsList => trips_list::show(store, prompt)?,
            Screen::TripDetail => trip_detail::show(store, prompt)?,
            Screen::NewExpense => new_expense::show(store, prompt)?,
        };
        if outcome == Outcome::Quit {
            return Ok(());
        }
    }
}

pub(crate) fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub(crate) fn fmt_money(d: &Decimal, ccy: &str) -> String {
    format!("{} {}", ccy, d.round_dp(2))
}

/// Day headers render like "Saturday, Mar 18".
pub(crate) fn format_day(date: NaiveDate) -> String {
    date.format("%A, %b %-d").to_string()
}

pub(crate) fn parse_id(arg: Option<&str>) -> Option<i64> {
    arg.and_then(|s| s.parse::<i64>().ok())
}
