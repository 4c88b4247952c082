//! Retention period parsing and expiration calculation.
//!
//! Purposes and collection points store their retention period as a short descriptor such as
//! `30 days` or `2 years`. This module turns such a descriptor plus a creation timestamp into the
//! timestamp at which the associated data expires.

use std::str::FromStr;

use chrono::{Days, Months, NaiveDateTime};

use crate::server::error::consent::ConsentError;

/// Calendar unit of a retention period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetentionUnit {
    Day,
    Week,
    Month,
    Year,
}

impl FromStr for RetentionUnit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" | "days" => Ok(Self::Day),
            "week" | "weeks" => Ok(Self::Week),
            "month" | "months" => Ok(Self::Month),
            "year" | "years" => Ok(Self::Year),
            _ => Err(()),
        }
    }
}

/// Parsed retention period descriptor, e.g. `30 days`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetentionPeriod {
    pub amount: u32,
    pub unit: RetentionUnit,
}

impl FromStr for RetentionPeriod {
    type Err = ConsentError;

    /// Parses `<amount> <unit>`, ignoring surrounding whitespace and unit case.
    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        let invalid = || ConsentError::InvalidRetentionPeriod(descriptor.to_string());

        let mut parts = descriptor.split_whitespace();
        let (Some(amount), Some(unit), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };

        if !amount.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let amount = amount.parse::<u32>().map_err(|_| invalid())?;
        let unit = unit.parse::<RetentionUnit>().map_err(|_| invalid())?;

        Ok(Self { amount, unit })
    }
}

impl RetentionPeriod {
    /// Adds the period to `start`, returning `None` on calendar overflow.
    ///
    /// Month and year arithmetic clamps to the last valid day of the target month, so
    /// `2024-01-31 + 1 month` is `2024-02-29`.
    pub fn add_to(&self, start: NaiveDateTime) -> Option<NaiveDateTime> {
        match self.unit {
            RetentionUnit::Day => start.checked_add_days(Days::new(self.amount as u64)),
            RetentionUnit::Week => start.checked_add_days(Days::new(self.amount as u64 * 7)),
            RetentionUnit::Month => start.checked_add_months(Months::new(self.amount)),
            RetentionUnit::Year => start.checked_add_months(Months::new(self.amount.checked_mul(12)?)),
        }
    }
}

/// Calculates the expiration timestamp for a retention period descriptor.
///
/// Pure function: no I/O, no clock access.
///
/// # Arguments
/// - `descriptor` - Retention period such as `30 days`, `6 months` or `1 year`
/// - `created_at` - Timestamp the retention period starts from
///
/// # Returns
/// - `Ok(NaiveDateTime)` - `created_at` plus the parsed period
/// - `Err(ConsentError::InvalidRetentionPeriod)` - Descriptor could not be parsed or the result
///   is out of the representable date range
///
/// # Example
/// ```ignore
/// // 2024-01-01T00:00:00 + "30 days" == 2024-01-31T00:00:00
/// let expires = expiration_date_time("30 days", created_at)?;
/// ```
pub fn expiration_date_time(
    descriptor: &str,
    created_at: NaiveDateTime,
) -> Result<NaiveDateTime, ConsentError> {
    let period = descriptor.parse::<RetentionPeriod>()?;

    period
        .add_to(created_at)
        .ok_or_else(|| ConsentError::InvalidRetentionPeriod(descriptor.to_string()))
}
