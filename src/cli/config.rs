//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::engine::format_weight;
use crate::models::{PrefixMode, WeightDistribution};
use clap::{ArgAction, Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Default)]
pub struct ConfigSetArgs {
    /// Default lower weight bound
    #[arg(long, value_name = "WEIGHT")]
    min_weight: Option<f64>,

    /// Default upper weight bound
    #[arg(long, value_name = "WEIGHT")]
    max_weight: Option<f64>,

    /// Default minimum tag count
    #[arg(long, value_name = "N")]
    min_tags: Option<usize>,

    /// Default maximum tag count
    #[arg(long, value_name = "N")]
    max_tags: Option<usize>,

    /// Default artist: prefix policy (all, none, or random)
    #[arg(long, value_name = "MODE")]
    prefix: Option<PrefixMode>,

    /// Default weight distribution (uniform, favor-low, favor-high, or normal)
    #[arg(long, value_name = "MODE")]
    distribution: Option<WeightDistribution>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<ThemeMode>,

    /// Load the built-in catalog at startup (true or false)
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    builtin_catalog: Option<bool>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            let json = serde_json::to_string_pretty(&config).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --min-weight, --max-weight, \
                 --min-tags, --max-tags, --prefix, --distribution, --theme, or --builtin-catalog",
            ));
        }

        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        self.apply(&mut config);

        config
            .validate()
            .map_err(|e| CliError::validation(e.to_string()))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.min_weight.is_none()
            && self.max_weight.is_none()
            && self.min_tags.is_none()
            && self.max_tags.is_none()
            && self.prefix.is_none()
            && self.distribution.is_none()
            && self.theme.is_none()
            && self.builtin_catalog.is_none()
    }

    fn apply(&self, config: &mut Config) {
        let generation = &mut config.generation;
        if let Some(weight) = self.min_weight {
            generation.min_weight = weight;
        }
        if let Some(weight) = self.max_weight {
            generation.max_weight = weight;
        }
        if let Some(count) = self.min_tags {
            generation.min_tags = count;
        }
        if let Some(count) = self.max_tags {
            generation.max_tags = count;
        }
        if let Some(prefix) = self.prefix {
            generation.prefix = prefix;
        }
        if let Some(distribution) = self.distribution {
            generation.distribution = distribution;
        }
        if let Some(theme) = self.theme {
            config.ui.theme_mode = theme;
        }
        if let Some(builtin) = self.builtin_catalog {
            config.labels.use_builtin_catalog = builtin;
        }
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let generation = &config.generation;

    println!("Artist Tag Mixer Configuration");
    println!("==============================");
    println!();

    println!("Generation:");
    println!(
        "  Weight Range: {} - {}",
        format_weight(generation.min_weight),
        format_weight(generation.max_weight)
    );
    println!(
        "  Tag Count: {} - {}",
        generation.min_tags, generation.max_tags
    );
    println!("  Prefix: {}", generation.prefix);
    println!("  Distribution: {}", generation.distribution);
    println!();

    println!("Labels:");
    println!(
        "  Built-in Catalog: {}",
        if config.labels.use_builtin_catalog { "yes" } else { "no" }
    );
    if config.labels.import_on_start.is_empty() {
        println!("  Import on Start: (none)");
    } else {
        println!("  Import on Start:");
        for path in &config.labels.import_on_start {
            println!("    {}", path.display());
        }
    }
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", config.ui.theme_mode.as_str());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_args_empty_detection() {
        assert!(ConfigSetArgs::default().is_empty());

        let args = ConfigSetArgs {
            builtin_catalog: Some(false),
            ..ConfigSetArgs::default()
        };
        assert!(!args.is_empty());
    }

    #[test]
    fn test_apply_overrides_only_given_fields() {
        let args = ConfigSetArgs {
            max_tags: Some(10),
            prefix: Some(PrefixMode::All),
            theme: Some(ThemeMode::Dark),
            builtin_catalog: Some(false),
            ..ConfigSetArgs::default()
        };
        let mut config = Config::new();
        args.apply(&mut config);

        assert_eq!(config.generation.max_tags, 10);
        assert_eq!(config.generation.min_tags, 3);
        assert_eq!(config.generation.prefix, PrefixMode::All);
        assert_eq!(config.ui.theme_mode, ThemeMode::Dark);
        assert!(!config.labels.use_builtin_catalog);
    }
}
