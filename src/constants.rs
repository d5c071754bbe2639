//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed output conventions.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Artist Tag Mixer";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "ArtistTagMixer";

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "TAGMIXER_CONFIG_DIR";

/// Default file name offered when exporting the label list.
pub const EXPORT_FILE_NAME: &str = "artist_tags.txt";

/// Marker prepended to a label when the prefix policy applies.
pub const ARTIST_PREFIX: &str = "artist:";

/// Maximum number of entries kept in the generation history.
pub const HISTORY_CAPACITY: usize = 20;

/// Lower bound of the tag-count sliders' upper limit.
pub const TAG_COUNT_FLOOR: usize = 20;

/// Weight slider bounds and step.
pub const WEIGHT_SLIDER_MIN: f64 = 0.0;
/// Upper bound of the weight sliders.
pub const WEIGHT_SLIDER_MAX: f64 = 3.0;
/// Increment applied per weight slider step.
pub const WEIGHT_SLIDER_STEP: f64 = 0.05;

/// How long the "copied" acknowledgement stays visible, in milliseconds.
pub const COPY_ACK_MILLIS: u64 = 2000;
