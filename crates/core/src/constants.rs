/// Minimum password length accepted by the registration and change-password forms
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Default page number for paginated transaction listings
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size for paginated transaction listings
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Default auto-dismiss duration for transient notifications, in milliseconds
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 5000;
