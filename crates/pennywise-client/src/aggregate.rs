//! Totals, breakdowns and extrema over a ledger's records.
//!
//! Every function here is pure over a borrowed slice and cannot fail;
//! degenerate input (no records, nothing in a category, a single month)
//! yields zero, an empty collection or `None`, and callers decide what to
//! show.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::categories::CategorySet;
use crate::record::ExpenseRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    pub percent: f64,
}

/// Parallel label/value series handed to a chart renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerReport {
    pub record_count: usize,
    pub total_spending: f64,
    pub categories: Vec<CategoryShare>,
    pub highest_expense: Option<ExpenseRecord>,
    pub monthly_totals: BTreeMap<String, f64>,
    pub show_monthly: bool,
}

pub fn total_spending(records: &[ExpenseRecord]) -> f64 {
    records.iter().map(ExpenseRecord::amount).sum()
}

/// One entry per configured category, in configured order, zeros included.
pub fn category_totals(records: &[ExpenseRecord], categories: &CategorySet) -> Vec<CategoryTotal> {
    categories
        .labels()
        .iter()
        .map(|label| CategoryTotal {
            category: label.clone(),
            amount: records
                .iter()
                .filter(|record| record.category() == label)
                .map(ExpenseRecord::amount)
                .sum(),
        })
        .collect()
}

pub fn category_percentages(
    records: &[ExpenseRecord],
    categories: &CategorySet,
) -> Vec<CategoryShare> {
    let total = total_spending(records);
    if total == 0.0 {
        return Vec::new();
    }

    category_totals(records, categories)
        .into_iter()
        .filter(|entry| entry.amount > 0.0)
        .map(|entry| CategoryShare {
            percent: entry.amount / total * 100.0,
            category: entry.category,
            amount: entry.amount,
        })
        .collect()
}

/// The first record carrying the largest amount.
pub fn highest_expense(records: &[ExpenseRecord]) -> Option<&ExpenseRecord> {
    records.iter().fold(None, |best, record| match best {
        Some(current) if current.amount() >= record.amount() => Some(current),
        _ => Some(record),
    })
}

pub fn monthly_totals(records: &[ExpenseRecord]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(record.month_key().to_string()).or_insert(0.0) += record.amount();
    }
    totals
}

pub fn chart_series(records: &[ExpenseRecord], categories: &CategorySet) -> ChartSeries {
    let (labels, values) = category_totals(records, categories)
        .into_iter()
        .filter(|entry| entry.amount > 0.0)
        .map(|entry| (entry.category, entry.amount))
        .unzip();
    ChartSeries { labels, values }
}

pub fn ledger_report(records: &[ExpenseRecord], categories: &CategorySet) -> Option<LedgerReport> {
    if records.is_empty() {
        return None;
    }

    let monthly_totals = monthly_totals(records);
    Some(LedgerReport {
        record_count: records.len(),
        total_spending: total_spending(records),
        categories: category_percentages(records, categories),
        highest_expense: highest_expense(records).cloned(),
        show_monthly: monthly_totals.len() > 1,
        monthly_totals,
    })
}

#[cfg(test)]
mod tests {
    use super::{
        ChartSeries, category_percentages, category_totals, chart_series, highest_expense,
        ledger_report, monthly_totals, total_spending,
    };
    use crate::categories::CategorySet;
    use crate::record::ExpenseRecord;

    fn record(date: &str, category: &str, amount: f64) -> ExpenseRecord {
        ExpenseRecord::new(
            date.to_string(),
            category.to_string(),
            amount,
            format!("{category} on {date}"),
        )
    }

    fn sample() -> Vec<ExpenseRecord> {
        vec![
            record("2024-01-15", "Food", 12.5),
            record("2024-01-20", "Transport", 3.0),
            record("2024-02-01", "Food", 7.25),
            record("2024-02-03", "Healthcare", 40.0),
            record("2024-03-11", "Other", 2.25),
        ]
    }

    #[test]
    fn empty_ledger_degrades_without_failing() {
        let categories = CategorySet::default();
        assert_eq!(total_spending(&[]), 0.0);
        assert!(category_percentages(&[], &categories).is_empty());
        assert!(highest_expense(&[]).is_none());
        assert!(monthly_totals(&[]).is_empty());
        assert_eq!(chart_series(&[], &categories), ChartSeries::default());
        assert!(ledger_report(&[], &categories).is_none());

        let totals = category_totals(&[], &categories);
        assert_eq!(totals.len(), categories.len());
        assert!(totals.iter().all(|entry| entry.amount == 0.0));
    }

    #[test]
    fn category_totals_cover_every_category_in_configured_order() {
        let categories = CategorySet::default();
        let totals = category_totals(&sample(), &categories);

        let labels = totals
            .iter()
            .map(|entry| entry.category.as_str())
            .collect::<Vec<&str>>();
        assert_eq!(
            labels,
            vec!["Food", "Transport", "Entertainment", "Utilities", "Healthcare", "Other"]
        );
        assert_eq!(totals[0].amount, 19.75);
        assert_eq!(totals[2].amount, 0.0);
        assert_eq!(totals[4].amount, 40.0);
    }

    #[test]
    fn category_totals_sum_to_total_spending() {
        let records = sample();
        let categories = CategorySet::default();
        let summed = category_totals(&records, &categories)
            .iter()
            .map(|entry| entry.amount)
            .sum::<f64>();
        assert!((summed - total_spending(&records)).abs() < 1e-9);
    }

    #[test]
    fn unknown_categories_count_toward_total_only() {
        let records = vec![record("2024-01-01", "Food", 5.0), record("2024-01-02", "Pets", 15.0)];
        let categories = CategorySet::default();

        assert_eq!(total_spending(&records), 20.0);
        let shares = category_percentages(&records, &categories);
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].category, "Food");
        assert!((shares[0].percent - 25.0).abs() < 1e-9);
    }

    #[test]
    fn percentages_skip_zero_categories() {
        let shares = category_percentages(&sample(), &CategorySet::default());
        let labels = shares
            .iter()
            .map(|share| share.category.as_str())
            .collect::<Vec<&str>>();
        assert_eq!(labels, vec!["Food", "Transport", "Healthcare", "Other"]);

        let sum = shares.iter().map(|share| share.percent).sum::<f64>();
        assert!((sum - 100.0).abs() < 1e-9);
        assert!((shares[2].percent - 61.538_461_538).abs() < 1e-6);
    }

    #[test]
    fn highest_expense_keeps_first_of_ties() {
        let records = vec![
            record("2024-01-01", "Food", 10.0),
            record("2024-01-02", "Transport", 30.0),
            record("2024-01-03", "Other", 30.0),
        ];
        let highest = highest_expense(&records);
        assert!(highest.is_some());
        if let Some(found) = highest {
            assert_eq!(found.date(), "2024-01-02");
            assert_eq!(found.category(), "Transport");
        }
    }

    #[test]
    fn monthly_totals_bucket_by_date_prefix() {
        let records = vec![
            record("2024-02-01", "Food", 7.0),
            record("2024-01-15", "Food", 10.0),
            record("2024-01-20", "Food", 5.0),
        ];
        let months = monthly_totals(&records);
        assert_eq!(
            months.into_iter().collect::<Vec<(String, f64)>>(),
            vec![("2024-01".to_string(), 15.0), ("2024-02".to_string(), 7.0)]
        );
    }

    #[test]
    fn malformed_dates_fall_into_their_own_bucket() {
        let records = vec![record("2024-1-5", "Food", 1.0), record("2024-01-05", "Food", 2.0)];
        let months = monthly_totals(&records);
        assert_eq!(months.get("2024-1-"), Some(&1.0));
        assert_eq!(months.get("2024-01"), Some(&2.0));
    }

    #[test]
    fn chart_series_are_parallel_and_nonzero() {
        let series = chart_series(&sample(), &CategorySet::default());
        assert_eq!(series.labels.len(), 4);
        assert_eq!(series.labels.len(), series.values.len());
        assert_eq!(series.labels[0], "Food");
        assert_eq!(series.values[0], 19.75);
        assert!(series.values.iter().all(|value| *value > 0.0));
    }

    #[test]
    fn report_hides_monthly_breakdown_for_a_single_month() {
        let categories = CategorySet::default();
        let single = vec![record("2024-05-01", "Food", 1.0), record("2024-05-30", "Food", 2.0)];
        let report = ledger_report(&single, &categories);
        assert!(report.is_some());
        if let Some(report) = report {
            assert!(!report.show_monthly);
            assert_eq!(report.monthly_totals.len(), 1);
            assert_eq!(report.record_count, 2);
        }

        let multi = ledger_report(&sample(), &categories);
        assert!(multi.is_some());
        if let Some(report) = multi {
            assert!(report.show_monthly);
            assert_eq!(report.monthly_totals.len(), 3);
            assert_eq!(report.total_spending, 65.0);
            assert_eq!(
                report.highest_expense.map(|record| record.amount()),
                Some(40.0)
            );
        }
    }
}
