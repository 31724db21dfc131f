//! Recurring session slots and the weekly template they live in.

use std::fmt;
use std::path::Path;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ArogyaError, ArogyaResult};
use crate::time_of_day::{Meridiem, TimeOfDay};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Exercise,
    Lifestyle,
}

impl SessionKind {
    /// Lowercase identifier used in download filenames.
    pub fn slug(&self) -> &'static str {
        match self {
            SessionKind::Exercise => "exercise",
            SessionKind::Lifestyle => "lifestyle",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SessionKind::Exercise => "Exercise Session",
            SessionKind::Lifestyle => "Lifestyle Discussion",
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One recurring session slot, authored in the reference timezone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionTemplate {
    pub kind: SessionKind,
    pub title: String,
    pub base_time: TimeOfDay,
    pub duration_minutes: u32,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    pub meeting_link: Url,
}

impl SessionTemplate {
    /// Title plus " - topic" when a topic is set.
    pub fn summary(&self) -> String {
        match &self.topic {
            Some(topic) => format!("{} - {}", self.title, topic),
            None => self.title.clone(),
        }
    }
}

/// Sessions for each weekday, in display order within a day.
///
/// Deserializes from TOML with one array of tables per day (`[[monday]]`).
/// Days left out have no sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeeklyTemplate {
    pub monday: Vec<SessionTemplate>,
    pub tuesday: Vec<SessionTemplate>,
    pub wednesday: Vec<SessionTemplate>,
    pub thursday: Vec<SessionTemplate>,
    pub friday: Vec<SessionTemplate>,
    pub saturday: Vec<SessionTemplate>,
    pub sunday: Vec<SessionTemplate>,
}

impl WeeklyTemplate {
    pub fn sessions_on(&self, weekday: Weekday) -> &[SessionTemplate] {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    pub fn session_count(&self) -> usize {
        [
            &self.monday,
            &self.tuesday,
            &self.wednesday,
            &self.thursday,
            &self.friday,
            &self.saturday,
            &self.sunday,
        ]
        .iter()
        .map(|day| day.len())
        .sum()
    }

    /// The program's standard week: three morning exercise sessions and
    /// one Tuesday evening lifestyle discussion, all in Eastern time.
    pub fn arogya() -> ArogyaResult<Self> {
        let link = Url::parse("https://zoom.us/j/example")
            .map_err(|e| ArogyaError::Template(e.to_string()))?;
        let nine_am = TimeOfDay::new(9, 0, Meridiem::Am)?;

        let exercise = |description: &str| SessionTemplate {
            kind: SessionKind::Exercise,
            title: "Exercise Session".to_string(),
            base_time: nine_am,
            duration_minutes: 45,
            description: description.to_string(),
            topic: None,
            meeting_link: link.clone(),
        };

        Ok(WeeklyTemplate {
            monday: vec![exercise("Full-body guided movement session")],
            tuesday: vec![SessionTemplate {
                kind: SessionKind::Lifestyle,
                title: "Lifestyle Discussion".to_string(),
                base_time: TimeOfDay::new(7, 0, Meridiem::Pm)?,
                duration_minutes: 30,
                description: "This week's wellness focus".to_string(),
                topic: Some("Nutrition & Healthy Eating".to_string()),
                meeting_link: link.clone(),
            }],
            wednesday: vec![exercise("Strength and mobility workout")],
            thursday: Vec::new(),
            friday: vec![exercise("Movement and flexibility focus")],
            saturday: Vec::new(),
            sunday: Vec::new(),
        })
    }

    /// Load a template from a TOML file.
    pub fn load(path: &Path) -> ArogyaResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ArogyaError::Template(format!("Could not read {}: {e}", path.display()))
        })?;
        Self::from_toml(&contents)
            .map_err(|e| ArogyaError::Template(format!("{}: {e}", path.display())))
    }

    pub fn from_toml(contents: &str) -> ArogyaResult<Self> {
        let template: WeeklyTemplate =
            toml::from_str(contents).map_err(|e| ArogyaError::Template(e.to_string()))?;

        for weekday in crate::schedule::WEEKDAYS {
            if let Some(bad) = template
                .sessions_on(weekday)
                .iter()
                .find(|s| s.duration_minutes == 0)
            {
                return Err(ArogyaError::Template(format!(
                    "'{}' on {} has a zero duration",
                    bad.title, weekday
                )));
            }
        }

        Ok(template)
    }
}
