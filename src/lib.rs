pub mod notes; // Note tables and spelling rules
pub mod scale; // Step patterns and scale generation

pub use notes::{normalize_tonic, select_spelling, Spelling};
pub use scale::{
    chromatic_scale, chromatic_scale_with, find_chromatic_scale, flat_chromatic_scale, scale,
    scale_named, scale_pattern, step, step_by, NamedScale, Pattern, ScaleError, StepCode,
};

/// Number of pitch classes in one octave.
pub const NOTE_COUNT: usize = 12;

/// Tonic used when the caller has no preference.
pub const DEFAULT_TONIC: &str = "C";
