//! Calendar month used as the monthly aggregation key

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A (year, month) pair, ordered chronologically
///
/// Field order matters: the derived `Ord` compares year before month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Returns `None` unless `month` is in 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Truncate a date to its month
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = String;

    /// Parse "YYYY-MM"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("Invalid month: {}", s))?;
        let year: i32 = year.parse().map_err(|_| format!("Invalid year: {}", s))?;
        let month: u32 = month.parse().map_err(|_| format!("Invalid month: {}", s))?;
        Self::new(year, month).ok_or_else(|| format!("Month out of range: {}", s))
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_date_and_display() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        let month = YearMonth::from_date(date);
        assert_eq!(month.to_string(), "2024-03");
        assert_eq!((month.year(), month.month()), (2024, 3));
    }

    #[test]
    fn test_chronological_ordering() {
        let dec = YearMonth::new(2023, 12).unwrap();
        let jan = YearMonth::new(2024, 1).unwrap();
        let feb = YearMonth::new(2024, 2).unwrap();
        assert!(dec < jan);
        assert!(jan < feb);
    }

    #[test]
    fn test_parse() {
        assert_eq!("2024-03".parse::<YearMonth>().unwrap(), YearMonth::new(2024, 3).unwrap());
        assert!("2024-13".parse::<YearMonth>().is_err());
        assert!("March".parse::<YearMonth>().is_err());
        assert!(YearMonth::new(2024, 0).is_none());
    }

    #[test]
    fn test_serializes_as_label() {
        let month = YearMonth::new(2024, 1).unwrap();
        assert_eq!(serde_json::to_string(&month).unwrap(), "\"2024-01\"");
    }
}
