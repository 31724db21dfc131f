use anyhow::Result;
use arogya_core::config::ArogyaConfig;
use owo_colors::OwoColorize;

use crate::WeekArgs;
use crate::render::Render;
use crate::utils::selection::WeekView;

pub fn run(config: &ArogyaConfig, args: &WeekArgs) -> Result<()> {
    let template = config.weekly_template()?;
    let view = WeekView::from_args(config, args)?;
    let week = view.build(&template);

    println!("{}", week.render());

    if week.is_empty() {
        println!();
        println!("{}", "No sessions scheduled this week".dimmed());
    }

    Ok(())
}
