use anyhow::{Context, Result};
use arogya_core::config::ArogyaConfig;
use arogya_core::site::Page;
use owo_colors::OwoColorize;

pub fn run(config: &ArogyaConfig, path: &str, json: bool) -> Result<()> {
    let page = Page::route(path);
    let meta = page.meta(&config.site_url, path);

    if json {
        let out = serde_json::to_string_pretty(&meta).context("Failed to serialize page metadata")?;
        println!("{}", out);
        return Ok(());
    }

    let name = if page.is_indexed() {
        page.to_string().green().to_string()
    } else {
        page.to_string().red().to_string()
    };

    println!("{} {}", name.bold(), path.dimmed());
    println!("  Title:        {}", meta.title);
    println!("  Description:  {}", meta.description);
    println!("  Canonical:    {}", meta.canonical_url);
    println!("  Robots:       {}", meta.robots);

    Ok(())
}
