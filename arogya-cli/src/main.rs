mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::{Context, Result};
use arogya_core::config::ArogyaConfig;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "arogya")]
#[command(about = "Browse the Arogya session schedule and add sessions to your calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Which week to show and in which timezone.
#[derive(Args, Clone)]
pub struct WeekArgs {
    /// Display timezone (ET, CT, MT, PT or an IANA name like America/Chicago)
    #[arg(long)]
    tz: Option<String>,

    /// Show the week containing this date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Weeks to step from that date (e.g. 1 for next week, -1 for last week)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    offset: i64,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a week of sessions
    Week {
        #[command(flatten)]
        week: WeekArgs,
    },
    /// Write an .ics file for one session or the whole week
    Export {
        #[command(flatten)]
        week: WeekArgs,

        /// Export a single session on this weekday (e.g. "tuesday" or "tue")
        #[arg(long)]
        day: Option<String>,

        /// Which session of that day, starting at 1
        #[arg(long, default_value_t = 1, requires = "day")]
        index: usize,

        /// Directory to write into (defaults to export_dir from config)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Pin events to the real UTC instant instead of the displayed time
        #[arg(long)]
        reference_clock: bool,
    },
    /// List the supported timezones
    Timezones {
        #[arg(long)]
        tz: Option<String>,
    },
    /// Show routing and metadata for a site path
    Page {
        path: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Register for the program
    Join {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        /// How you heard about Arogya
        #[arg(long)]
        referral: Option<String>,
    },
    /// Send the team a message
    Contact {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        message: Option<String>,
    },
    /// Get the free weekly wellness tip
    Subscribe {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Sign up for the newsletter
    Newsletter {
        #[arg(long)]
        email: Option<String>,
    },
    /// Show config path and effective settings
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ArogyaConfig::load().context("Failed to load config")?;
    init_logging(&config);

    match cli.command {
        Commands::Week { week } => commands::week::run(&config, &week),
        Commands::Export {
            week,
            day,
            index,
            out,
            reference_clock,
        } => commands::export::run(&config, &week, day.as_deref(), index, out, reference_clock),
        Commands::Timezones { tz } => commands::timezones::run(&config, tz.as_deref()),
        Commands::Page { path, json } => commands::page::run(&config, &path, json),
        Commands::Join {
            name,
            email,
            phone,
            referral,
        } => commands::forms::join(name, email, phone, referral).await,
        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => commands::forms::contact(name, email, subject, message).await,
        Commands::Subscribe { first_name, email } => {
            commands::forms::subscribe(first_name, email).await
        }
        Commands::Newsletter { email } => commands::forms::newsletter(email).await,
        Commands::Config => commands::config::run(&config),
    }
}

/// RUST_LOG wins over the configured level. Output goes to stderr.
fn init_logging(config: &ArogyaConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
