/// Application name shared by configuration sources
pub const APP_NAME: &str = "cadence";
pub const CONFIG_FILE: &str = const_str::concat!(APP_NAME, ".toml");
pub const ENV_PREFIX: &str = "CADENCE";

/// "Every N periods" bounds, inclusive
pub const INTERVAL_MIN: u8 = 1;
pub const INTERVAL_MAX: u8 = 30;

/// "After N occurrences" bounds, inclusive
pub const OCCURRENCE_COUNT_MIN: u8 = 1;
pub const OCCURRENCE_COUNT_MAX: u8 = 30;

/// "Nth weekday of the month" bounds, inclusive. A fifth occurrence is clamped to the fourth.
pub const WEEK_INDEX_MIN: u8 = 1;
pub const WEEK_INDEX_MAX: u8 = 4;
