// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived-view computations: pure folds over an expense list, recomputed
//! from current state on every render.

use crate::models::{Category, Expense};
use chrono::NaiveDate;
use comfy_table::Color;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripStats {
    pub total: Decimal,
    pub daily_avg: Decimal,
}

/// Sum and per-entry average of an expense list. The average divides by the
/// number of entries, not elapsed days, matching the product's "daily
/// average" as shipped; an empty list yields zero for both.
pub fn trip_stats(expenses: &[Expense]) -> TripStats {
    let total: Decimal = expenses.iter().map(|e| e.amount).sum();
    let daily_avg = if expenses.is_empty() {
        Decimal::ZERO
    } else {
        (total / Decimal::from(expenses.len())).round_dp(2)
    };
    TripStats { total, daily_avg }
}

pub struct DayGroup<'a> {
    pub date: NaiveDate,
    pub expenses: Vec<&'a Expense>,
}

/// Partitions expenses by exact date, most recent day first. Expenses within
/// a day keep their insertion order.
pub fn group_by_date(expenses: &[Expense]) -> Vec<DayGroup<'_>> {
    let mut groups: BTreeMap<NaiveDate, Vec<&Expense>> = BTreeMap::new();
    for expense in expenses {
        groups.entry(expense.date).or_default().push(expense);
    }
    groups
        .into_iter()
        .rev()
        .map(|(date, expenses)| DayGroup { date, expenses })
        .collect()
}

pub struct CategoryStyle {
    pub color: Color,
    pub glyph: &'static str,
}

/// Fixed presentation per category. Total over the enum, so an unknown
/// category read back from a snapshot (deserialized as `Other`) still
/// renders with the neutral style.
pub fn category_style(category: Category) -> CategoryStyle {
    let (color, glyph) = match category {
        Category::Activities => (Color::Red, "🏃"),
        Category::Workspace => (Color::Blue, "💻"),
        Category::Transportation => (Color::DarkYellow, "🚌"),
        Category::Groceries => (Color::DarkBlue, "🛒"),
        Category::Restaurants => (Color::Cyan, "🍽️"),
        Category::Accommodation => (Color::DarkRed, "🏨"),
        Category::Other => (Color::Grey, "📝"),
    };
    CategoryStyle { color, glyph }
}
