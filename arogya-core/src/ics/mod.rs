//! ICS export of session instances.
//!
//! Payloads follow RFC 5545 line endings (CRLF) but keep a fixed, minimal
//! property set: no UID, DTSTAMP or line folding.

mod filename;
mod generate;

pub use filename::{sanitize_label, session_filename, week_filename};
pub use generate::{ExportClock, IcsOptions, escape_text, event_window, format_utc, generate_ics};
