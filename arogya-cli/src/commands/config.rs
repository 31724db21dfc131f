use anyhow::Result;
use arogya_core::config::ArogyaConfig;
use owo_colors::OwoColorize;

pub fn run(config: &ArogyaConfig) -> Result<()> {
    let config_path = ArogyaConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Exports:    {}", config.export_path().display());
    if let Some(template) = &config.template_path {
        println!("  Template:   {}", template.display());
    }

    println!();
    println!("{}", "Settings".bold());
    println!("  Brand:      {}", config.brand);
    println!("  Product:    {}", config.product_id);
    println!("  Site:       {}", config.site_url);
    println!("  Reference:  {}", config.reference_timezone.label());
    println!(
        "  Display:    {}",
        config
            .default_timezone
            .map(|tz| tz.label().to_string())
            .unwrap_or_else(|| "system timezone".dimmed().to_string())
    );
    println!("  Clock:      {:?}", config.export_clock);
    println!("  Log level:  {}", config.log_level);

    Ok(())
}
