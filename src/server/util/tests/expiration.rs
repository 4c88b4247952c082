//! Tests for the retention period parser and `expiration_date_time`.

use super::*;

use crate::server::{
    error::consent::ConsentError,
    util::expiration::{expiration_date_time, RetentionPeriod, RetentionUnit},
};

/// Expected: "30 days" from 2024-01-01 lands on 2024-01-31
#[test]
fn adds_thirty_days() {
    let result = expiration_date_time("30 days", timestamp(2024, 1, 1));

    assert_eq!(result.unwrap(), timestamp(2024, 1, 31));
}

/// Expected: unit parsing ignores case, plural form and surrounding whitespace
#[test]
fn parses_units_leniently() {
    let period: RetentionPeriod = "  2 WEEKS ".parse().unwrap();
    assert_eq!(
        period,
        RetentionPeriod {
            amount: 2,
            unit: RetentionUnit::Week
        }
    );

    let result = expiration_date_time("1 Year", timestamp(2024, 3, 15));
    assert_eq!(result.unwrap(), timestamp(2025, 3, 15));
}

/// Expected: month arithmetic clamps to the last day of a shorter month
#[test]
fn clamps_month_end() {
    let result = expiration_date_time("1 month", timestamp(2024, 1, 31));

    assert_eq!(result.unwrap(), timestamp(2024, 2, 29));
}

/// Expected: zero amount returns the creation timestamp
#[test]
fn zero_amount_is_creation_time() {
    let result = expiration_date_time("0 days", timestamp(2024, 1, 1));

    assert_eq!(result.unwrap(), timestamp(2024, 1, 1));
}

/// Expected: Err(InvalidRetentionPeriod) rather than the unchanged creation timestamp
#[test]
fn rejects_unparsable_descriptors() {
    for descriptor in [
        "",
        "forever",
        "30",
        "days 30",
        "-1 days",
        "+30 days",
        "3 fortnights",
        "1 day extra",
    ] {
        let result = expiration_date_time(descriptor, timestamp(2024, 1, 1));

        assert!(
            matches!(result, Err(ConsentError::InvalidRetentionPeriod(ref d)) if d == descriptor),
            "descriptor {:?} should be rejected, got {:?}",
            descriptor,
            result
        );
    }
}

/// Expected: Err(InvalidRetentionPeriod) when the result leaves the supported date range
#[test]
fn rejects_overflow() {
    let result = expiration_date_time("4000000000 years", timestamp(2024, 1, 1));

    assert!(matches!(
        result,
        Err(ConsentError::InvalidRetentionPeriod(_))
    ));
}
