// Copyright (c) 2025 Spendbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Closed set of expense categories. Shared by validation, the on-disk
/// schema, and aggregation grouping, so an invalid category can never
/// reach a ledger file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Sports,
    Health,
    Study,
    Food,
    Leisure,
    Clothes,
    Others,
    Savings,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Sports,
        Category::Health,
        Category::Study,
        Category::Food,
        Category::Leisure,
        Category::Clothes,
        Category::Others,
        Category::Savings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sports => "SPORTS",
            Category::Health => "HEALTH",
            Category::Study => "STUDY",
            Category::Food => "FOOD",
            Category::Leisure => "LEISURE",
            Category::Clothes => "CLOTHES",
            Category::Others => "OTHERS",
            Category::Savings => "SAVINGS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| LedgerError::Validation {
                field: "category",
                reason: format!(
                    "'{}' is not one of {}",
                    s,
                    Category::ALL.map(|c| c.as_str()).join(", ")
                ),
            })
    }
}

/// One row of a monthly ledger file. The serde renames pin the exact
/// CSV header: Name,Category,Amount,Currency,Description,Date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Category")]
    pub category: Category,
    #[serde(rename = "Amount")]
    pub amount: Decimal,
    #[serde(rename = "Currency")]
    pub currency: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
}

impl Transaction {
    /// The ledger file this row belongs to is keyed by its date's
    /// year and month.
    pub fn month(&self) -> Month {
        Month::from_date(self.date)
    }
}

/// Year-month key for ledger files and income entries, rendered as
/// `YYYY-MM`. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn from_date(date: NaiveDate) -> Month {
        Month {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month key holds a valid year-month")
    }

    pub fn succ(self) -> Month {
        if self.month == 12 {
            Month {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Month {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Months from `from` to `to` inclusive, in chronological order.
    /// Empty when `from > to`.
    pub fn range_inclusive(from: Month, to: Month) -> Vec<Month> {
        let mut months = Vec::new();
        let mut m = from;
        while m <= to {
            months.push(m);
            m = m.succ();
        }
        months
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").map_err(
            |_| LedgerError::Validation {
                field: "month",
                reason: format!("'{}' is not a YYYY-MM month", s),
            },
        )?;
        Ok(Month::from_date(date))
    }
}

impl From<Month> for String {
    fn from(m: Month) -> String {
        m.to_string()
    }
}

impl TryFrom<String> for Month {
    type Error = LedgerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
