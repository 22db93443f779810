//! Year filtering for result and suggestion lists
//!
//! The filter is a view over an already-fetched list; it never triggers a
//! request.

use std::collections::BTreeSet;
use std::fmt;

use crate::remote::ResultItem;

/// Label used for the pass-through filter
pub const ALL_YEARS: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum YearFilter {
    #[default]
    All,
    /// Keep items whose `year` equals this string exactly
    Year(String),
}

impl YearFilter {
    /// Parse a filter value; `"All"` (any case) passes everything through
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case(ALL_YEARS) {
            YearFilter::All
        } else {
            YearFilter::Year(value.to_string())
        }
    }

    pub fn matches(&self, item: &ResultItem) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Year(year) => item.year == *year,
        }
    }

    /// Narrow `items` to the matching subset, keeping order
    pub fn apply<'a>(&self, items: &'a [ResultItem]) -> Vec<&'a ResultItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::All => write!(f, "{ALL_YEARS}"),
            YearFilter::Year(year) => write!(f, "{year}"),
        }
    }
}

/// Distinct years present in `items`, newest first (lexical descending)
pub fn available_years(items: &[ResultItem]) -> Vec<String> {
    let years: BTreeSet<&str> = items.iter().map(|item| item.year.as_str()).collect();
    years.into_iter().rev().map(str::to_string).collect()
}
