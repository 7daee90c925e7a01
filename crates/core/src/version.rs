//! Optimistic concurrency check shared by every guarded write.

use crate::errors::{Error, Result};

/// Compares the stored version token against the one the caller supplied.
///
/// Tokens are the entity's `updated_at` in epoch milliseconds and must match
/// exactly. Any mismatch, stale or even from the future, is a
/// [`Error::VersionConflict`] and the caller must re-read before retrying.
pub fn check_version(stored: i64, supplied: i64) -> Result<()> {
    if stored != supplied {
        return Err(Error::VersionConflict);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_version_passes() {
        assert!(check_version(1_700_000_000_000, 1_700_000_000_000).is_ok());
    }

    #[test]
    fn test_stale_version_is_rejected() {
        let result = check_version(1_700_000_000_500, 1_700_000_000_000);
        assert!(matches!(result, Err(Error::VersionConflict)));
    }

    #[test]
    fn test_future_version_is_rejected() {
        let result = check_version(1_700_000_000_000, 1_700_000_000_500);
        assert!(matches!(result, Err(Error::VersionConflict)));
    }
}
