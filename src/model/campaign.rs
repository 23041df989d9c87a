//! Campaign performance records shown in the dashboard table.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Active,
    Paused,
    Completed,
}

impl Status {
    pub fn all() -> [Status; 3] {
        [Status::Active, Status::Paused, Status::Completed]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Paused => "Paused",
            Status::Completed => "Completed",
        }
    }
}

/// One campaign performance record
///
/// Rows are read-only once generated; the query engine only derives
/// views over them. `id` is unique within a generated collection and
/// stable until the data is regenerated. `date` is a display string
/// the engine never parses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub status: Status,
    pub budget: f64,
    pub spent: f64,
    pub clicks: u64,
    pub conversions: u64,
    pub ctr: f64,
    pub cpc: f64,
    pub roas: f64,
    pub date: String,
}

/// Sortable columns of the campaign table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Status,
    Budget,
    Spent,
    Clicks,
    Conversions,
    Roas,
}

impl SortField {
    /// Columns in table display order
    pub fn columns() -> [SortField; 7] {
        [
            SortField::Name,
            SortField::Status,
            SortField::Budget,
            SortField::Spent,
            SortField::Clicks,
            SortField::Conversions,
            SortField::Roas,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::Name => "Campaign",
            SortField::Status => "Status",
            SortField::Budget => "Budget",
            SortField::Spent => "Spent",
            SortField::Clicks => "Clicks",
            SortField::Conversions => "Conversions",
            SortField::Roas => "ROAS",
        }
    }

    /// Whether the column holds numeric values (right-aligned in the table)
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            SortField::Budget
                | SortField::Spent
                | SortField::Clicks
                | SortField::Conversions
                | SortField::Roas
        )
    }
}

/// Format an integer with thousands separators, e.g. 12345 -> "12,345"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_columns_start_with_campaign_name() {
        let columns = SortField::columns();
        assert_eq!(columns[0], SortField::Name);
        assert_eq!(columns[0].label(), "Campaign");
        assert!(!columns[0].is_numeric());
        assert!(columns[2].is_numeric());
    }

    #[test]
    fn test_every_sort_field_is_a_displayed_column() {
        let columns = SortField::columns();
        for field in [
            SortField::Name,
            SortField::Status,
            SortField::Budget,
            SortField::Spent,
            SortField::Clicks,
            SortField::Conversions,
            SortField::Roas,
        ] {
            assert!(columns.contains(&field), "{} not displayed", field.label());
        }
    }
}
