//! Ledger aggregation
//!
//! Pure functions over a snapshot of records: total spend, per-category
//! subtotals and the year-month filter. Inputs are slices of anything that
//! borrows as an `ExpenseRecord`, so the output of `filter_by_month` can be
//! fed straight back in.

use std::borrow::Borrow;
use std::collections::HashMap;

use crate::models::{ExpenseRecord, Money, YearMonth};

/// Sum of all amounts; zero for an empty slice
pub fn total_of<R: Borrow<ExpenseRecord>>(records: &[R]) -> Money {
    records.iter().map(|r| as_record(r).amount).sum()
}

/// Subtotals per category label, in first-seen order
pub fn by_category<R: Borrow<ExpenseRecord>>(records: &[R]) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for record in records.iter().map(as_record) {
        totals.add(record.category.label(), record.amount);
    }
    totals
}

/// Records dated exactly `period`, in their original order
pub fn filter_by_month<R: Borrow<ExpenseRecord>>(
    records: &[R],
    period: YearMonth,
) -> Vec<&ExpenseRecord> {
    records
        .iter()
        .map(as_record)
        .filter(|r| r.date == period)
        .collect()
}

fn as_record<R: Borrow<ExpenseRecord>>(r: &R) -> &ExpenseRecord {
    r.borrow()
}

/// Accumulated amount for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Money,
    /// Number of records that contributed
    pub count: usize,
}

/// One slice of a proportional chart
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Money,
    /// Share of the chart in percent (0-100)
    pub percentage: f64,
}

/// Insertion-ordered mapping from category label to subtotal
#[derive(Debug, Clone, Default)]
pub struct CategoryTotals {
    entries: Vec<CategoryTotal>,
    index: HashMap<String, usize>,
}

impl CategoryTotals {
    fn add(&mut self, category: &str, amount: Money) {
        match self.index.get(category) {
            Some(&i) => {
                let entry = &mut self.entries[i];
                entry.amount += amount;
                entry.count += 1;
            }
            None => {
                self.index.insert(category.to_string(), self.entries.len());
                self.entries.push(CategoryTotal {
                    category: category.to_string(),
                    amount,
                    count: 1,
                });
            }
        }
    }

    /// Subtotal for a category label, if any record carried it
    pub fn get(&self, category: &str) -> Option<Money> {
        self.index.get(category).map(|&i| self.entries[i].amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all subtotals
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Chart slices, one per category, in the same order
    ///
    /// Percentages are taken against the sum of absolute subtotals so that
    /// refunds still produce a drawable chart. All zeros when nothing was spent.
    pub fn shares(&self) -> Vec<CategoryShare> {
        let whole: f64 = self
            .entries
            .iter()
            .map(|e| e.amount.cents().unsigned_abs() as f64)
            .sum();
        self.entries
            .iter()
            .map(|e| CategoryShare {
                category: e.category.clone(),
                amount: e.amount,
                percentage: if whole == 0.0 {
                    0.0
                } else {
                    e.amount.cents().unsigned_abs() as f64 / whole * 100.0
                },
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a CategoryTotals {
    type Item = &'a CategoryTotal;
    type IntoIter = std::slice::Iter<'a, CategoryTotal>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn record(units: i64, category: Category, year: u32, month: u32) -> ExpenseRecord {
        ExpenseRecord::new(
            Money::from_dollars_cents(units, 0),
            format!("{} item", category),
            category,
            YearMonth::new(year, month).unwrap(),
        )
    }

    fn sample_ledger() -> Vec<ExpenseRecord> {
        vec![
            record(24, Category::Other, 2024, 1),
            record(1000, Category::Other, 2024, 1),
            record(30, Category::Food, 2024, 2),
        ]
    }

    #[test]
    fn test_total_of() {
        assert_eq!(total_of(&sample_ledger()), Money::from_dollars_cents(1054, 0));
        assert_eq!(total_of::<ExpenseRecord>(&[]), Money::zero());
    }

    #[test]
    fn test_by_category_keeps_first_seen_order() {
        let totals = by_category(&sample_ledger());

        let labels: Vec<_> = totals.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(labels, vec!["Other", "Food"]);
        assert_eq!(totals.get("Other"), Some(Money::from_dollars_cents(1024, 0)));
        assert_eq!(totals.get("Food"), Some(Money::from_dollars_cents(30, 0)));
        assert_eq!(totals.get("Entertainment"), None);
        assert_eq!(totals.iter().next().unwrap().count, 2);
    }

    #[test]
    fn test_category_partition_sums_to_total() {
        let ledger = vec![
            record(5, Category::Entertainment, 2023, 11),
            record(7, Category::Food, 2023, 12),
            record(11, Category::Custom("Rent".into()), 2024, 1),
            record(13, Category::Food, 2024, 1),
            record(-2, Category::Entertainment, 2024, 1),
        ];
        let totals = by_category(&ledger);
        assert_eq!(totals.total(), total_of(&ledger));
        assert_eq!(totals.len(), 3);
    }

    #[test]
    fn test_filter_by_month() {
        let ledger = sample_ledger();
        let january = filter_by_month(&ledger, YearMonth::new(2024, 1).unwrap());

        assert_eq!(january.len(), 2);
        assert_eq!(january[0], &ledger[0]);
        assert_eq!(january[1], &ledger[1]);
        assert_eq!(total_of(&january), Money::from_dollars_cents(1024, 0));
    }

    #[test]
    fn test_filter_by_month_with_no_match_is_empty() {
        let ledger = sample_ledger();
        let none = filter_by_month(&ledger, YearMonth::new(2099, 12).unwrap());
        assert!(none.is_empty());
        assert!(by_category(&none).is_empty());
        assert_eq!(total_of(&none), Money::zero());
    }

    #[test]
    fn test_filter_matches_whole_key_only() {
        // 2024-1x must not match a 2024-01 filter
        let ledger = vec![
            record(1, Category::Food, 2024, 1),
            record(2, Category::Food, 2024, 10),
            record(3, Category::Food, 2024, 11),
            record(4, Category::Food, 2024, 1),
        ];
        let january = filter_by_month(&ledger, YearMonth::new(2024, 1).unwrap());
        let amounts: Vec<_> = january.iter().map(|r| r.amount.dollars()).collect();
        assert_eq!(amounts, vec![1, 4]);
    }

    #[test]
    fn test_shares() {
        let shares = by_category(&sample_ledger()).shares();
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].category, "Other");
        assert!((shares[0].percentage - 1024.0 / 1054.0 * 100.0).abs() < 1e-9);
        let sum: f64 = shares.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_largest_amounts_sum_without_overflow() {
        let month = YearMonth::new(2024, 1).unwrap();
        let big = ExpenseRecord::new(Money::MAX, "Yacht", Category::Other, month);
        let ledger = vec![big.clone(), big.clone(), big];

        assert_eq!(total_of(&ledger).cents(), Money::MAX.cents() * 3);
        let totals = by_category(&ledger);
        assert_eq!(totals.get("Other"), Some(total_of(&ledger)));
        assert_eq!(totals.shares()[0].percentage, 100.0);
    }

    #[test]
    fn test_shares_of_nothing() {
        let ledger = vec![record(0, Category::Food, 2024, 1)];
        let shares = by_category(&ledger).shares();
        assert_eq!(shares[0].percentage, 0.0);
    }
}
