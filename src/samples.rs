// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Built-in sample data, substituted per entry whenever a snapshot is
//! missing or unreadable. Trip totals here are display caches carried over
//! from the seed data set; they get recomputed on the first expense
//! mutation.

use crate::models::{Category, Expense, Trip};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid sample date")
}

fn trip(id: i64, name: &str, total: Decimal, daily_avg: Decimal) -> Trip {
    Trip {
        id,
        name: name.to_string(),
        total,
        daily_avg,
        currency: "ILS".to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn expense(
    id: i64,
    date: NaiveDate,
    name: &str,
    category: Category,
    amount: Decimal,
    original_amount: Decimal,
    original_currency: &str,
) -> Expense {
    Expense {
        id,
        date,
        name: name.to_string(),
        category,
        amount,
        currency: "ILS".to_string(),
        original_amount,
        original_currency: original_currency.to_string(),
    }
}

pub fn trips() -> Vec<Trip> {
    vec![
        trip(1, "Guatemala", Decimal::new(526820, 2), Decimal::new(23946, 2)),
        trip(2, "Sicily", Decimal::new(567705, 2), Decimal::new(25805, 2)),
        trip(3, "Japan", Decimal::new(682350, 2), Decimal::new(32588, 2)),
    ]
}

pub fn expenses() -> BTreeMap<i64, Vec<Expense>> {
    use Category::*;
    let mut map = BTreeMap::new();
    map.insert(
        1,
        vec![
            expense(
                1,
                date(2023, 3, 19),
                "Volcano Hike 🏔️",
                Activities,
                Decimal::new(46253, 2),
                Decimal::new(28700, 2),
                "USD",
            ),
            expense(
                2,
                date(2023, 3, 18),
                "Cafe de Artista",
                Workspace,
                Decimal::new(1030, 2),
                Decimal::new(5300, 2),
                "GTQ",
            ),
            expense(
                3,
                date(2023, 3, 18),
                "Bus to Antigua",
                Transportation,
                Decimal::new(8058, 2),
                Decimal::new(5000, 2),
                "USD",
            ),
            expense(
                4,
                date(2023, 3, 18),
                "Bus Snacks & Drinks",
                Groceries,
                Decimal::new(495, 2),
                Decimal::new(2500, 2),
                "GTQ",
            ),
            expense(
                5,
                date(2023, 3, 18),
                "Lunch 80s Music Cafe",
                Restaurants,
                Decimal::new(2476, 2),
                Decimal::new(12000, 2),
                "GTQ",
            ),
            expense(
                6,
                date(2023, 3, 18),
                "Boat to Panajachel",
                Transportation,
                Decimal::new(1238, 2),
                Decimal::new(6000, 2),
                "GTQ",
            ),
            expense(
                7,
                date(2023, 3, 18),
                "Antigua Hostel",
                Accommodation,
                Decimal::new(7587, 2),
                Decimal::new(4700, 2),
                "USD",
            ),
        ],
    );
    map.insert(
        2,
        vec![
            expense(
                1,
                date(2023, 5, 10),
                "Taormina Beach Day",
                Activities,
                Decimal::new(5520, 2),
                Decimal::new(3200, 2),
                "€",
            ),
            expense(
                2,
                date(2023, 5, 12),
                "Mount Etna Tour",
                Activities,
                Decimal::new(18975, 2),
                Decimal::new(11000, 2),
                "€",
            ),
            expense(
                3,
                date(2023, 5, 11),
                "Seafood Restaurant",
                Restaurants,
                Decimal::new(8625, 2),
                Decimal::new(5000, 2),
                "€",
            ),
        ],
    );
    map.insert(
        3,
        vec![
            expense(
                1,
                date(2023, 7, 5),
                "Tokyo Hotel",
                Accommodation,
                Decimal::new(125000, 2),
                Decimal::new(9650000, 2),
                "¥",
            ),
            expense(
                2,
                date(2023, 7, 6),
                "Shinkansen to Kyoto",
                Transportation,
                Decimal::new(17850, 2),
                Decimal::new(1376000, 2),
                "¥",
            ),
        ],
    );
    map
}
