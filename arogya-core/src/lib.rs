//! Session scheduling for the Arogya wellness program.
//!
//! - `week`: Monday-aligned week anchors and labels
//! - `timezone`: the four display zones and wall-clock projection
//! - `schedule`: the weekly template projected onto a week and zone
//! - `ics` / `export`: .ics payloads and download filenames
//! - `site` and `forms`: page metadata and form submission collaborators

pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod forms;
pub mod ics;
pub mod schedule;
pub mod session;
pub mod site;
pub mod time_of_day;
pub mod timezone;
pub mod week;

pub use error::{ArogyaError, ArogyaResult};
pub use export::{CalendarExporter, CalendarFile};
pub use schedule::{DaySchedule, SessionInstance, WeekSchedule};
pub use session::{SessionKind, SessionTemplate, WeeklyTemplate};
pub use time_of_day::{Meridiem, TimeOfDay};
pub use timezone::{Timezone, adjusted_time};
pub use week::{WeekAnchor, week_start};
