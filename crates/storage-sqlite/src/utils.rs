//! Utility functions for SQLite storage operations.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a decimal column tolerantly.
///
/// Values are written as canonical decimal strings, but a row edited by hand
/// or written by an older build may hold scientific notation or garbage. A
/// cell that cannot be read is logged and treated as zero instead of failing
/// the whole query.
pub(crate) fn parse_decimal_column(value: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value) {
        Ok(d) => d,
        Err(e_plain) => match Decimal::from_scientific(value) {
            Ok(d) => d,
            Err(e_scientific) => {
                log::warn!(
                    "Failed to parse {} '{}': as decimal ({}), as scientific ({}). Falling back to zero.",
                    field_name,
                    value,
                    e_plain,
                    e_scientific
                );
                Decimal::ZERO
            }
        },
    }
}
