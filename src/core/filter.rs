// src/core/filter.rs
//
// Order-history scopes offered by the backend's `filter_type` parameter.
use std::{fmt, str::FromStr};

use chrono::{Datelike, Local};

use crate::config::consts::FLOOR_YEAR;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FilterRange {
    #[default]
    LastThreeMonths,
    ThisYear,
    Year(i32),
}

impl FilterRange {
    /// Value sent as `filter_type`.
    pub fn value(&self) -> String {
        match self {
            FilterRange::LastThreeMonths => s!("1"),
            FilterRange::ThisYear => s!("2"),
            FilterRange::Year(y) => y.to_string(),
        }
    }

    pub fn label(&self) -> String {
        match self {
            FilterRange::LastThreeMonths => s!("近三个月订单"),
            FilterRange::ThisYear => s!("今年内订单"),
            FilterRange::Year(y) => format!("{y}年订单"),
        }
    }
}

impl fmt::Display for FilterRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}

impl FromStr for FilterRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(FilterRange::LastThreeMonths),
            "2" => Ok(FilterRange::ThisYear),
            other => match other.parse::<i32>() {
                Ok(y) if y >= FLOOR_YEAR => Ok(FilterRange::Year(y)),
                Ok(y) => Err(format!("Year {y} is before {FLOOR_YEAR}")),
                Err(_) => Err(format!("Unknown filter: {other}")),
            },
        }
    }
}

/// The two fixed scopes, then one entry per year from last year down to
/// `FLOOR_YEAR`, descending.
pub fn filter_options(current_year: i32) -> Vec<FilterRange> {
    let mut opts = vec![FilterRange::LastThreeMonths, FilterRange::ThisYear];
    opts.extend((FLOOR_YEAR..current_year).rev().map(FilterRange::Year));
    opts
}

pub fn current_year() -> i32 {
    Local::now().year()
}
