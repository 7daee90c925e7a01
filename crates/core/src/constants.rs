/// Page number used when the caller does not supply one
pub const DEFAULT_PAGE_NUMBER: i64 = 0;

/// Page size used when the caller does not supply one
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Smallest accepted page size
pub const MIN_PAGE_SIZE: i64 = 1;

/// Largest accepted page size
pub const MAX_PAGE_SIZE: i64 = 100;

/// Longest accepted title for accounts and classifier entries
pub const MAX_TITLE_LENGTH: usize = 255;

/// Longest accepted free-form description
pub const MAX_DESCRIPTION_LENGTH: usize = 500;
