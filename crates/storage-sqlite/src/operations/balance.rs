//! Account balance recalculation.
//!
//! The balance column is derived state: always the sum of the account's
//! operation values. Every operation mutation calls [`recompute_balance`] on
//! its own connection before the surrounding transaction commits, so the
//! stored balance can never drift from the operation rows.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use rust_decimal::Decimal;

use finbook_core::errors::Result;

use crate::errors::IntoCore;
use crate::schema::{accounts, operations};
use crate::utils::parse_decimal_column;

/// Recomputes the balance of `account_id` from its operations and stores it,
/// moving the account's `updated_at` to `now`.
///
/// An account that no longer exists is a silent no-op: the update simply
/// affects zero rows.
pub(crate) fn recompute_balance(
    conn: &mut SqliteConnection,
    account_id: &str,
    now: i64,
) -> Result<()> {
    let values = operations::table
        .filter(operations::account_id.eq(account_id))
        .select(operations::value)
        .load::<String>(conn)
        .into_core()?;

    let balance: Decimal = values
        .iter()
        .map(|v| parse_decimal_column(v, "value"))
        .sum();

    diesel::update(accounts::table.filter(accounts::id.eq(account_id)))
        .set((
            accounts::balance.eq(balance.to_string()),
            accounts::updated_at.eq(now),
        ))
        .execute(conn)
        .into_core()?;

    Ok(())
}
