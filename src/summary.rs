//! Dashboard stat cards derived from fetched collections

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::{Expense, HasStatus, LandBank, Project, Status};

/// Record counts per workflow status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusTally {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub other: usize,
}

impl StatusTally {
    pub fn of<'a, T, I>(records: I) -> Self
    where
        T: HasStatus + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut tally = Self::default();
        for record in records {
            tally.total += 1;
            match record.status() {
                Status::Pending => tally.pending += 1,
                Status::Approved => tally.approved += 1,
                Status::Rejected => tally.rejected += 1,
                Status::Other(_) => tally.other += 1,
            }
        }
        tally
    }
}

/// Expense totals, overall and per category (categories sorted by name).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpenseSummary {
    pub total: Decimal,
    pub by_category: BTreeMap<String, Decimal>,
}

impl ExpenseSummary {
    pub fn of<'a, I: IntoIterator<Item = &'a Expense>>(expenses: I) -> Self {
        let mut summary = Self::default();
        for expense in expenses {
            summary.total += expense.amount;
            *summary
                .by_category
                .entry(expense.category.trim().to_string())
                .or_default() += expense.amount;
        }
        summary
    }
}

/// Sum of `total_area_acres`; records without an area count as zero.
pub fn total_land_area<'a, I: IntoIterator<Item = &'a LandBank>>(land_banks: I) -> Decimal {
    land_banks
        .into_iter()
        .filter_map(|l| l.total_area_acres)
        .sum()
}

/// Progress bar value in percent, clamped to 0..=100.
pub fn progress_percent(project: &Project) -> u8 {
    project
        .progress_percent
        .unwrap_or_default()
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
        .round()
        .to_u8()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn expense(category: &str, amount: &str, status: &str) -> Expense {
        Expense {
            id: 1,
            project_id: 1,
            category: category.to_string(),
            description: None,
            amount: dec(amount),
            expense_date: None,
            paid_to: None,
            status: Status::from(status),
            expense_files: Vec::new(),
        }
    }

    #[test]
    fn tally_counts_each_status() {
        let rows = vec![
            expense("Civil", "10", "Pending"),
            expense("Civil", "10", "approved"),
            expense("Civil", "10", "Pending"),
            expense("Civil", "10", "On Hold"),
        ];
        let tally = StatusTally::of(&rows);
        assert_eq!(tally.total, 4);
        assert_eq!(tally.pending, 2);
        assert_eq!(tally.approved, 1);
        assert_eq!(tally.rejected, 0);
        assert_eq!(tally.other, 1);
    }

    #[test]
    fn expenses_total_per_category() {
        let rows = vec![
            expense("Civil", "1500.50", "Pending"),
            expense("Electrical", "200", "Pending"),
            expense("Civil ", "99.50", "Approved"),
        ];
        let summary = ExpenseSummary::of(&rows);
        assert_eq!(summary.total, dec("1800.00"));
        assert_eq!(summary.by_category["Civil"], dec("1600"));
        assert_eq!(summary.by_category["Electrical"], dec("200"));
    }

    fn project(progress: Option<&str>) -> Project {
        Project {
            id: 3,
            project_name: "Kutch Solar".to_string(),
            project_type: None,
            capacity_mw: None,
            client: None,
            land_bank: None,
            location: None,
            start_date: None,
            end_date: None,
            progress_percent: progress.map(dec),
            status: Status::Pending,
        }
    }

    #[test]
    fn progress_is_clamped_and_rounded() {
        assert_eq!(progress_percent(&project(None)), 0);
        assert_eq!(progress_percent(&project(Some("42.6"))), 43);
        assert_eq!(progress_percent(&project(Some("130"))), 100);
        assert_eq!(progress_percent(&project(Some("-5"))), 0);
    }

    #[test]
    fn land_area_skips_missing_values() {
        let parcel = |area: Option<&str>| -> LandBank {
            serde_json::from_value(serde_json::json!({
                "id": 1,
                "land_name": "Parcel",
                "total_area_acres": area,
            }))
            .unwrap()
        };
        let parcels = vec![parcel(Some("120.5")), parcel(None), parcel(Some("30"))];
        assert_eq!(total_land_area(&parcels), dec("150.5"));
    }
}
