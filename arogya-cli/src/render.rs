//! Colored terminal rendering for schedule types.

use arogya_core::{DaySchedule, SessionInstance, SessionKind, Timezone, WeekSchedule};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for SessionKind {
    fn render(&self) -> String {
        match self {
            SessionKind::Exercise => self.label().green().to_string(),
            SessionKind::Lifestyle => self.label().magenta().to_string(),
        }
    }
}

impl Render for Timezone {
    fn render(&self) -> String {
        format!("{} {}", self.code().bold(), self.identifier().dimmed())
    }
}

impl Render for SessionInstance<'_> {
    fn render(&self) -> String {
        let template = self.template;
        let time = format!("{:>8}", self.display_time.to_string());
        let length = format!("{} min", template.duration_minutes);

        let mut line = format!(
            "{} {} {}",
            time.bold(),
            template.summary(),
            length.dimmed()
        );
        line.push_str(&format!("\n           {}", template.kind.render()));
        line
    }
}

impl Render for DaySchedule<'_> {
    fn render(&self) -> String {
        let mut header = format!("{} {}", self.weekday_name().bold(), self.formatted_date.dimmed());
        if self.is_today {
            header.push_str(&format!(" {}", "Today".cyan().bold()));
        }

        let mut lines = vec![header];
        if self.sessions.is_empty() {
            lines.push(format!("  {}", "No sessions".dimmed()));
        }
        for (i, session) in self.sessions.iter().enumerate() {
            let index = format!("{}.", i + 1);
            lines.push(format!("  {} {}", index.dimmed(), session.render()));
        }

        lines.join("\n")
    }
}

impl Render for WeekSchedule<'_> {
    fn render(&self) -> String {
        let mut title = format!("{}", self.range_label().bold());
        if self.days.iter().any(|d| d.is_today) {
            title.push_str(&format!(" {}", "(this week)".cyan()));
        }
        title.push_str(&format!("  {}", self.timezone.label().dimmed()));

        let mut blocks = vec![title];
        blocks.extend(self.days.iter().map(Render::render));
        blocks.join("\n\n")
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
