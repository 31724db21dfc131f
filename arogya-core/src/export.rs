//! Calendar exports ready to hand to whatever saves the file.

use tracing::info;

use crate::config::ArogyaConfig;
use crate::constants::{DEFAULT_BRAND, DEFAULT_PRODUCT_ID};
use crate::ics::{self, ExportClock, IcsOptions};
use crate::schedule::{SessionInstance, WeekSchedule};
use crate::timezone::Timezone;

/// An .ics payload and the name it should be downloaded under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarFile {
    pub filename: String,
    pub contents: String,
}

impl CalendarFile {
    pub fn event_count(&self) -> usize {
        self.contents
            .lines()
            .filter(|l| *l == "BEGIN:VEVENT")
            .count()
    }
}

#[derive(Debug, Clone)]
pub struct CalendarExporter {
    brand: String,
    product_id: String,
    clock: ExportClock,
    reference: Timezone,
}

impl Default for CalendarExporter {
    fn default() -> Self {
        CalendarExporter {
            brand: DEFAULT_BRAND.to_string(),
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            clock: ExportClock::default(),
            reference: Timezone::default(),
        }
    }
}

impl CalendarExporter {
    pub fn new(brand: impl Into<String>, product_id: impl Into<String>) -> Self {
        CalendarExporter {
            brand: brand.into(),
            product_id: product_id.into(),
            ..Default::default()
        }
    }

    pub fn from_config(config: &ArogyaConfig) -> Self {
        CalendarExporter {
            brand: config.brand.clone(),
            product_id: config.product_id.clone(),
            clock: config.export_clock,
            reference: config.reference_timezone,
        }
    }

    pub fn with_clock(mut self, clock: ExportClock, reference: Timezone) -> Self {
        self.clock = clock;
        self.reference = reference;
        self
    }

    fn options(&self) -> IcsOptions<'_> {
        IcsOptions {
            product_id: &self.product_id,
            clock: self.clock,
            reference: self.reference,
        }
    }

    /// One-event payload for a single session.
    pub fn single_event(&self, instance: &SessionInstance<'_>) -> String {
        ics::generate_ics([instance], &self.options())
    }

    /// Every session of the week in one payload, Monday first.
    pub fn week_bundle(&self, schedule: &WeekSchedule<'_>) -> String {
        ics::generate_ics(schedule.sessions(), &self.options())
    }

    pub fn export_session(&self, instance: &SessionInstance<'_>) -> CalendarFile {
        let file = CalendarFile {
            filename: ics::session_filename(&self.brand, instance),
            contents: self.single_event(instance),
        };
        info!(
            filename = %file.filename,
            date = %instance.date,
            clock = ?self.clock,
            "exported session"
        );
        file
    }

    pub fn export_week(&self, schedule: &WeekSchedule<'_>) -> CalendarFile {
        let file = CalendarFile {
            filename: ics::week_filename(&self.brand, &schedule.range_label()),
            contents: self.week_bundle(schedule),
        };
        info!(
            filename = %file.filename,
            events = file.event_count(),
            clock = ?self.clock,
            "exported week"
        );
        file
    }
}
