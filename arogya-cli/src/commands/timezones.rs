use anyhow::Result;
use arogya_core::Timezone;
use arogya_core::config::ArogyaConfig;
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::utils::selection::resolve_timezone;

pub fn run(config: &ArogyaConfig, tz: Option<&str>) -> Result<()> {
    let active = resolve_timezone(tz, config)?;

    for zone in Timezone::ALL {
        let marker = if zone == active { "*".green().to_string() } else { " ".to_string() };
        println!("{} {}  {}", marker, zone.render(), zone.label());
    }

    println!();
    println!(
        "{}",
        format!("Sessions are scheduled in {}", config.reference_timezone.label()).dimmed()
    );

    Ok(())
}
