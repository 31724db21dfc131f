//! Configuration at ~/.config/arogya/config.toml, overridable with AROGYA_* variables.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BRAND, DEFAULT_PRODUCT_ID, DEFAULT_SITE_URL};
use crate::error::{ArogyaError, ArogyaResult};
use crate::ics::ExportClock;
use crate::session::WeeklyTemplate;
use crate::timezone::Timezone;

static DEFAULT_EXPORT_DIR: &str = ".";
static DEFAULT_LOG_LEVEL: &str = "warn";
static ENV_PREFIX: &str = "AROGYA";

fn default_brand() -> String {
    DEFAULT_BRAND.to_string()
}

fn default_product_id() -> String {
    DEFAULT_PRODUCT_ID.to_string()
}

fn default_site_url() -> String {
    DEFAULT_SITE_URL.to_string()
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_DIR)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArogyaConfig {
    /// Prefix of downloaded .ics filenames.
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Organization shown in the PRODID line.
    #[serde(default = "default_product_id")]
    pub product_id: String,

    #[serde(default = "default_site_url")]
    pub site_url: String,

    /// Zone the weekly template is authored in.
    #[serde(default)]
    pub reference_timezone: Timezone,

    /// Display zone when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_timezone: Option<Timezone>,

    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    #[serde(default)]
    pub export_clock: ExportClock,

    /// TOML weekly template replacing the built-in week.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_path: Option<PathBuf>,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ArogyaConfig {
    fn default() -> Self {
        ArogyaConfig {
            brand: default_brand(),
            product_id: default_product_id(),
            site_url: default_site_url(),
            reference_timezone: Timezone::default(),
            default_timezone: None,
            export_dir: default_export_dir(),
            export_clock: ExportClock::default(),
            template_path: None,
            log_level: default_log_level(),
        }
    }
}

impl ArogyaConfig {
    pub fn config_path() -> ArogyaResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ArogyaError::Config("Could not determine config directory".into()))?
            .join("arogya");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented-out file on first run.
    pub fn load() -> ArogyaResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (which may be missing) layered under AROGYA_* variables.
    pub fn load_from(path: &Path) -> ArogyaResult<Self> {
        Self::load_layered(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_layered(path: &Path, environment: Environment) -> ArogyaResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(environment)
            .build()
            .map_err(|e| ArogyaError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ArogyaError::Config(e.to_string()))
    }

    pub fn create_default_config(path: &Path) -> ArogyaResult<()> {
        let contents = format!(
            "\
# arogya configuration

# Prefix for downloaded .ics files:
# brand = \"{DEFAULT_BRAND}\"

# Organization in the calendar PRODID:
# product_id = \"{DEFAULT_PRODUCT_ID}\"

# Timezone sessions are authored in (ET, CT, MT or PT):
# reference_timezone = \"ET\"

# Timezone to display when --tz is not given (defaults to the system zone):
# default_timezone = \"PT\"

# Where exported .ics files are written:
# export_dir = \"{DEFAULT_EXPORT_DIR}\"

# \"viewer\" writes the displayed time, \"reference\" writes the true UTC instant:
# export_clock = \"viewer\"

# Replace the built-in week with a TOML template:
# template_path = \"~/.config/arogya/week.toml\"

# log_level = \"{DEFAULT_LOG_LEVEL}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ArogyaError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ArogyaError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Export directory with `~` expanded.
    pub fn export_path(&self) -> PathBuf {
        expand(&self.export_dir)
    }

    /// The configured template file, or the built-in week.
    pub fn weekly_template(&self) -> ArogyaResult<WeeklyTemplate> {
        match &self.template_path {
            Some(path) => WeeklyTemplate::load(&expand(path)),
            None => WeeklyTemplate::arogya(),
        }
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
