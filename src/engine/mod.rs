//! Combination engine.
//!
//! Turns a selection plus [`GeneratorSettings`] into one prompt string:
//! a random number of distinct labels, each optionally prefixed with
//! `artist:` and wrapped in a `WEIGHT::label::` annotation, joined by `", "`.
//!
//! The engine is pure apart from the injected random source; recording the
//! result into history is the caller's job (see [`crate::session::Session`]).

pub mod weight;

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use tracing::debug;

use crate::constants::ARTIST_PREFIX;
use crate::models::{GeneratorSettings, PrefixMode, SelectionSet};

pub use weight::{format_weight, random_factor, sample_weight};

/// Separator placed between formatted tokens.
pub const TOKEN_SEPARATOR: &str = ", ";

/// Formatted weight that suppresses the annotation.
const ZERO_WEIGHT: &str = "0.00";

/// Reasons a generation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    /// Nothing is selected
    EmptySelection,
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySelection => {
                write!(f, "Select at least one artist tag to combine")
            }
        }
    }
}

impl std::error::Error for GenerationError {}

/// Generates one output string from the selection.
///
/// # Errors
///
/// Returns [`GenerationError::EmptySelection`] if nothing is selected.
pub fn generate<R: Rng + ?Sized>(
    selection: &SelectionSet,
    settings: &GeneratorSettings,
    rng: &mut R,
) -> Result<String, GenerationError> {
    if selection.is_empty() {
        return Err(GenerationError::EmptySelection);
    }

    let mut pool: Vec<&str> = selection.iter().collect();
    let (low, high) = settings.tag_bounds();
    let count = rng.gen_range(low..=high).min(pool.len());

    // Partial Fisher-Yates: the first `count` slots are a uniform sample in
    // uniformly random order.
    let (picked, _) = pool.partial_shuffle(rng, count);

    let tokens: Vec<String> = picked
        .iter()
        .map(|label| format_token(label, settings, rng))
        .collect();

    debug!(
        picked = tokens.len(),
        selected = selection.len(),
        "generated combination"
    );
    Ok(tokens.join(TOKEN_SEPARATOR))
}

/// Formats a single picked label.
///
/// Labels ending in a digit get a trailing space so the weight syntax stays
/// unambiguous. A weight that rounds to `0.00` leaves the label unwrapped.
pub fn format_token<R: Rng + ?Sized>(
    label: &str,
    settings: &GeneratorSettings,
    rng: &mut R,
) -> String {
    let mut text = if ends_with_digit(label) {
        format!("{label} ")
    } else {
        label.to_string()
    };

    if wants_prefix(settings.prefix, rng) {
        text.insert_str(0, ARTIST_PREFIX);
    }

    let weight = format_weight(sample_weight(settings, rng));
    if weight == ZERO_WEIGHT {
        text
    } else {
        format!("{weight}::{text}::")
    }
}

fn wants_prefix<R: Rng + ?Sized>(mode: PrefixMode, rng: &mut R) -> bool {
    match mode {
        PrefixMode::All => true,
        PrefixMode::None => false,
        PrefixMode::Random => rng.gen_bool(0.5),
    }
}

fn ends_with_digit(label: &str) -> bool {
    label.chars().next_back().is_some_and(|c| c.is_ascii_digit())
}
