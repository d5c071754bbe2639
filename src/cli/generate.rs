//! Generate command: headless combination runs.

use crate::cli::common::{CliError, CliResult};
use crate::cli::sources::LabelSourceArgs;
use crate::models::{PrefixMode, WeightDistribution};
use crate::session::Session;
use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Combine selected labels into weighted prompt tags
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub sources: LabelSourceArgs,

    /// Select a label, adding it to the list if missing (repeatable)
    #[arg(short, long = "select", value_name = "LABEL")]
    pub select: Vec<String>,

    /// Select every label
    #[arg(long, conflicts_with = "search")]
    pub all: bool,

    /// Select every label containing this text (case-insensitive)
    #[arg(long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Lower weight bound
    #[arg(long, value_name = "WEIGHT")]
    pub min_weight: Option<f64>,

    /// Upper weight bound
    #[arg(long, value_name = "WEIGHT")]
    pub max_weight: Option<f64>,

    /// Minimum number of tags per result
    #[arg(long, value_name = "N")]
    pub min_tags: Option<usize>,

    /// Maximum number of tags per result
    #[arg(long, value_name = "N")]
    pub max_tags: Option<usize>,

    /// artist: prefix policy (all, none, random)
    #[arg(long, value_name = "MODE")]
    pub prefix: Option<PrefixMode>,

    /// Weight distribution (uniform, favor-low, favor-high, normal)
    #[arg(long, value_name = "MODE")]
    pub distribution: Option<WeightDistribution>,

    /// Number of results to generate
    #[arg(short = 'n', long, value_name = "N", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub times: u32,

    /// Seed for reproducible output
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON-serializable generation report
#[derive(Serialize, Debug)]
struct GenerateOutput {
    results: Vec<String>,
    history: Vec<String>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let mut session = self.sources.load_session()?;
        self.apply_settings(&mut session)?;
        self.apply_selection(&mut session);

        let results = match self.seed {
            Some(seed) => self.run(&mut session, &mut StdRng::seed_from_u64(seed))?,
            None => self.run(&mut session, &mut rand::thread_rng())?,
        };

        if self.json {
            let output = GenerateOutput {
                results,
                history: session.history().iter().map(str::to_string).collect(),
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize results to JSON: {e}")))?;
            println!("{json}");
        } else {
            for result in results {
                println!("{result}");
            }
        }

        Ok(())
    }

    fn apply_settings(&self, session: &mut Session) -> CliResult<()> {
        let settings = session.settings_mut();
        if let Some(weight) = self.min_weight {
            settings.min_weight = weight;
        }
        if let Some(weight) = self.max_weight {
            settings.max_weight = weight;
        }
        if let Some(count) = self.min_tags {
            settings.min_tags = count;
        }
        if let Some(count) = self.max_tags {
            settings.max_tags = count;
        }
        if let Some(prefix) = self.prefix {
            settings.prefix = prefix;
        }
        if let Some(distribution) = self.distribution {
            settings.distribution = distribution;
        }

        settings
            .validate()
            .map_err(|e| CliError::validation(e.to_string()))
    }

    fn apply_selection(&self, session: &mut Session) {
        if self.all {
            session.select_visible("");
        } else if let Some(query) = &self.search {
            session.select_visible(query);
        }

        for label in &self.select {
            let label = label.trim();
            if !session.add_label(label) && !session.is_selected(label) {
                session.toggle(label);
            }
        }
    }

    fn run<R: Rng + ?Sized>(&self, session: &mut Session, rng: &mut R) -> CliResult<Vec<String>> {
        (0..self.times)
            .map(|_| {
                session
                    .generate_with(rng)
                    .map(str::to_string)
                    .map_err(|e| CliError::empty_selection(e.to_string()))
            })
            .collect()
    }
}
