/// Daily limit assigned to every new account
pub const DEFAULT_DAILY_LIMIT: i64 = 500;

/// "Nearing" starts at 9/10 of the daily limit
pub const NEARING_THRESHOLD_NUMERATOR: i64 = 9;
pub const NEARING_THRESHOLD_DENOMINATOR: i64 = 10;

/// Number of expenses shown on the dashboard
pub const DASHBOARD_RECENT_EXPENSES: i64 = 10;

/// Upper bound for the recent expenses listing
pub const MAX_RECENT_EXPENSES: i64 = 100;

/// Column widths of the persisted schema
pub const MAX_NAME_LENGTH: usize = 120;
pub const MAX_EMAIL_LENGTH: usize = 120;
pub const MAX_CATEGORY_LENGTH: usize = 64;
pub const MAX_NOTE_LENGTH: usize = 256;

/// Largest amount or limit the integer columns can hold
pub const MAX_STORED_AMOUNT: i64 = i32::MAX as i64;

/// Currency symbol used in alert texts
pub const CURRENCY_SYMBOL: &str = "₹";

/// Product name used in outgoing mail
pub const APP_NAME: &str = "DailyCap";
