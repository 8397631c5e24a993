// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Display currency assigned to new trips and fresh expense drafts.
pub const DEFAULT_CURRENCY: &str = "ILS";

pub const DEFAULT_TRIP_NAME: &str = "New Trip";

/// A named, currency-tagged container for expenses. `total` and `daily_avg`
/// are caches derived from the trip's expense list; they are recomputed on
/// every expense mutation and are never authoritative on their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: i64,
    pub name: String,
    pub total: Decimal,
    pub daily_avg: Decimal,
    pub currency: String,
}

impl Trip {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Trip {
            id,
            name: name.into(),
            total: Decimal::ZERO,
            daily_avg: Decimal::ZERO,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// A single dated spend record. `amount` is denominated in the owning trip's
/// display currency; `original_amount`/`original_currency` record what the
/// user actually paid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub date: NaiveDate,
    pub name: String,
    pub category: Category,
    pub amount: Decimal,
    pub currency: String,
    pub original_amount: Decimal,
    pub original_currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Activities,
    Workspace,
    Transportation,
    Groceries,
    Restaurants,
    Accommodation,
    Other,
}

impl Category {
    /// The six user-selectable categories, in form order.
    pub const SELECTABLE: [Category; 6] = [
        Category::Activities,
        Category::Workspace,
        Category::Transportation,
        Category::Groceries,
        Category::Restaurants,
        Category::Accommodation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Activities => "Activities",
            Category::Workspace => "Workspace",
            Category::Transportation => "Transportation",
            Category::Groceries => "Groceries",
            Category::Restaurants => "Restaurants",
            Category::Accommodation => "Accommodation",
            Category::Other => "Other",
        }
    }

    /// Maps a stored category name back to the enum. Anything unrecognized
    /// lands on `Other` so old or hand-edited snapshots cannot fail here.
    pub fn from_label(s: &str) -> Category {
        match s {
            "Activities" => Category::Activities,
            "Workspace" => Category::Workspace,
            "Transportation" => Category::Transportation,
            "Groceries" => Category::Groceries,
            "Restaurants" => Category::Restaurants,
            "Accommodation" => Category::Accommodation,
            _ => Category::Other,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Category::from_label(&s))
    }
}

/// The in-progress new-expense form. `amount` stays raw text until save so
/// partial or invalid input survives navigation without being coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub name: String,
    pub amount: String,
    pub category: Category,
    pub date: NaiveDate,
    pub currency: String,
}

impl Draft {
    pub fn new(date: NaiveDate) -> Self {
        Draft {
            name: String::new(),
            amount: String::new(),
            category: Category::Activities,
            date,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}
