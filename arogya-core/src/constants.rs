//! Defaults shared by the core and the CLI.

/// Prefix for downloaded .ics filenames.
pub const DEFAULT_BRAND: &str = "arogya";

/// Organization part of the PRODID line.
pub const DEFAULT_PRODUCT_ID: &str = "Arogya Wellness";

pub const DEFAULT_SITE_URL: &str = "https://arogya.com";

/// Fixed LOCATION value for every exported session.
pub const EVENT_LOCATION: &str = "Online";

pub const DAYS_PER_WEEK: i64 = 7;
