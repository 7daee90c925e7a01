//! Creation and modification instants carried by every persisted entity.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Current wall clock time in milliseconds since the Unix epoch.
///
/// All persisted instants and version tokens use this resolution.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Creation and last-modification instants in epoch milliseconds.
///
/// `updated_at` doubles as the entity's version token: every write sets it
/// to the write instant, and guarded writes require the caller to echo the
/// value they last read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Timestamps {
    pub created_at: i64,
    pub updated_at: i64,
}

impl Timestamps {
    /// Timestamps for a freshly created entity, both fields set to now.
    pub fn now() -> Self {
        let now = now_millis();
        Self {
            created_at: now,
            updated_at: now,
        }
    }
}
