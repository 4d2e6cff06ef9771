//! Revenue aggregation for the dashboard analysis panel.
//!
//! All figures are derived from already-collected [`RevenueRecord`]s; this
//! module only groups and sums them.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::catalog::ServiceCategory;

/// One payment received
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueRecord {
    pub date: NaiveDate,
    pub category: ServiceCategory,
    pub amount: f64,
}

/// Calendar month key, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Short label for chart axes, e.g. "Mar 24"
    pub fn short_label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(date) => date.format("%b %y").to_string(),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub month: YearMonth,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRevenue {
    pub category: ServiceCategory,
    pub total: f64,
    /// Share of the grand total, 0.0 to 100.0
    pub share_percent: f64,
}

/// Aggregated view over a set of revenue records
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueAnalysis {
    total: f64,
    monthly: Vec<MonthlyRevenue>,
    by_category: Vec<CategoryRevenue>,
}

impl RevenueAnalysis {
    pub fn from_records(records: &[RevenueRecord]) -> Self {
        let total: f64 = records.iter().map(|record| record.amount).sum();

        let mut months: BTreeMap<YearMonth, f64> = BTreeMap::new();
        let mut categories: HashMap<ServiceCategory, f64> = HashMap::new();
        for record in records {
            *months.entry(YearMonth::of(record.date)).or_insert(0.0) += record.amount;
            *categories.entry(record.category).or_insert(0.0) += record.amount;
        }

        let monthly = months
            .into_iter()
            .map(|(month, total)| MonthlyRevenue { month, total })
            .collect();

        let mut by_category: Vec<CategoryRevenue> = categories
            .into_iter()
            .map(|(category, category_total)| CategoryRevenue {
                category,
                total: category_total,
                share_percent: if total == 0.0 {
                    0.0
                } else {
                    category_total * 100.0 / total
                },
            })
            .collect();
        by_category.sort_by(|a, b| {
            b.total
                .total_cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });

        Self {
            total,
            monthly,
            by_category,
        }
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Monthly totals in chronological order, only months with records
    pub fn monthly(&self) -> &[MonthlyRevenue] {
        &self.monthly
    }

    /// Category totals, largest first
    pub fn by_category(&self) -> &[CategoryRevenue] {
        &self.by_category
    }

    pub fn average_per_month(&self) -> f64 {
        if self.monthly.is_empty() {
            0.0
        } else {
            self.total / self.monthly.len() as f64
        }
    }

    /// Percent change from the second-to-last month to the last one
    pub fn month_over_month_growth(&self) -> Option<f64> {
        let [.., previous, latest] = self.monthly.as_slice() else {
            return None;
        };
        if previous.total == 0.0 {
            return None;
        }
        Some((latest.total - previous.total) * 100.0 / previous.total)
    }

    pub fn best_month(&self) -> Option<&MonthlyRevenue> {
        self.monthly
            .iter()
            .max_by(|a, b| a.total.total_cmp(&b.total))
    }

    pub fn is_empty(&self) -> bool {
        self.monthly.is_empty()
    }
}
