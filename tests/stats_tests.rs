// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tripclip::models::{Category, Expense};
use tripclip::stats::{category_style, group_by_date, trip_stats};

fn expense(id: i64, date: &str, amount: &str) -> Expense {
    Expense {
        id,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        name: format!("E{}", id),
        category: Category::Activities,
        amount: amount.parse().unwrap(),
        currency: "ILS".to_string(),
        original_amount: amount.parse().unwrap(),
        original_currency: "ILS".to_string(),
    }
}

#[test]
fn total_is_sum_of_amounts() {
    let expenses = vec![
        expense(1, "2023-03-18", "10.30"),
        expense(2, "2023-03-18", "4.95"),
        expense(3, "2023-03-19", "24.76"),
    ];
    let stats = trip_stats(&expenses);
    assert_eq!(stats.total, "40.01".parse::<Decimal>().unwrap());
}

#[test]
fn empty_list_has_zero_stats() {
    let stats = trip_stats(&[]);
    assert_eq!(stats.total, Decimal::ZERO);
    assert_eq!(stats.daily_avg, Decimal::ZERO);
}

#[test]
fn daily_avg_divides_by_entry_count_rounded() {
    let expenses = vec![
        expense(1, "2023-03-18", "10.00"),
        expense(2, "2023-03-18", "10.00"),
        expense(3, "2023-03-19", "5.00"),
    ];
    let stats = trip_stats(&expenses);
    // 25 / 3 entries, not divided by the 2 distinct days.
    assert_eq!(stats.daily_avg, "8.33".parse::<Decimal>().unwrap());
}

#[test]
fn groups_partition_expenses_by_date_descending() {
    let expenses = vec![
        expense(1, "2023-05-10", "1.00"),
        expense(2, "2023-05-12", "2.00"),
        expense(3, "2023-05-11", "3.00"),
        expense(4, "2023-05-12", "4.00"),
    ];
    let groups = group_by_date(&expenses);

    let dates: Vec<String> = groups.iter().map(|g| g.date.to_string()).collect();
    assert_eq!(dates, ["2023-05-12", "2023-05-11", "2023-05-10"]);

    // Every expense lands in exactly one group.
    let total: usize = groups.iter().map(|g| g.expenses.len()).sum();
    assert_eq!(total, expenses.len());

    // Insertion order within a day is preserved.
    let may12: Vec<i64> = groups[0].expenses.iter().map(|e| e.id).collect();
    assert_eq!(may12, [2, 4]);
}

#[test]
fn every_category_has_a_style() {
    for category in Category::SELECTABLE {
        assert!(!category_style(category).glyph.is_empty());
    }
    // The catch-all renders too, whatever the snapshot held.
    assert_eq!(category_style(Category::Other).glyph, "📝");
}

#[test]
fn unknown_category_deserializes_to_other() {
    let raw = r#"{"id":1,"date":"2023-03-18","name":"X","category":"Lasers",
        "amount":"1.00","currency":"ILS","originalAmount":"1.00","originalCurrency":"ILS"}"#;
    let parsed: Expense = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.category, Category::Other);
}
