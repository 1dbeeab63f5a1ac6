/*
Scale Generation
================

Every operation here reads from the fixed tables in `notes` and returns fresh
values; nothing is cached or mutated.

Two separate passes over the tonic, in this order:
1. `select_spelling` on the tonic exactly as written ("d" is D minor: flats)
2. `normalize_tonic` to find it in the chosen table ("d" -> "D")

Example usage:
  chromatic_scale("C")?          // [C, C#, D, ..., B, C]
  find_chromatic_scale("F")?     // [F, Gb, G, ..., E, F]
  scale("C", "MMmMMMm")?         // [C, D, E, F, G, A, B, C]
  scale_named("a", NamedScale::NaturalMinor)?
*/

pub mod error;
pub mod named;
pub mod step_code;

pub use error::ScaleError;
pub use named::NamedScale;
pub use step_code::{Pattern, StepCode};

use crate::notes::{normalize_tonic, select_spelling, Spelling};
use crate::NOTE_COUNT;

/// Note `semitones` above `tonic` in `scale`, wrapping around its end.
///
/// The tonic must be spelled exactly as `scale` spells it; no normalization
/// happens here.
pub fn step_by<'a>(
    scale: &[&'a str],
    tonic: &str,
    semitones: usize,
) -> Result<&'a str, ScaleError> {
    let index = scale
        .iter()
        .position(|&note| note == tonic)
        .ok_or_else(|| ScaleError::TonicNotFound {
            tonic: tonic.to_string(),
            spelling: None,
        })?;
    // Reduce first: index + semitones can overflow
    Ok(scale[(index + semitones % scale.len()) % scale.len()])
}

/// Note one step above `tonic` in `scale`
pub fn step<'a>(scale: &[&'a str], tonic: &str, code: StepCode) -> Result<&'a str, ScaleError> {
    step_by(scale, tonic, code.semitones())
}

/// Index of the normalized tonic in the given spelling's table
fn tonic_index(tonic: &str, spelling: Spelling) -> Result<usize, ScaleError> {
    spelling
        .position(&normalize_tonic(tonic))
        .ok_or_else(|| ScaleError::TonicNotFound {
            tonic: tonic.to_string(),
            spelling: Some(spelling),
        })
}

/// Thirteen notes from the tonic up to the same tonic an octave higher
pub fn chromatic_scale_with(
    tonic: &str,
    spelling: Spelling,
) -> Result<Vec<&'static str>, ScaleError> {
    let start = tonic_index(tonic, spelling)?;
    let notes = spelling.notes();
    // Table laid end to end so the octave can run past B
    Ok(notes
        .iter()
        .chain(notes.iter())
        .skip(start)
        .take(NOTE_COUNT + 1)
        .copied()
        .collect())
}

/// Sharp-spelled chromatic scale
pub fn chromatic_scale(tonic: &str) -> Result<Vec<&'static str>, ScaleError> {
    chromatic_scale_with(tonic, Spelling::Sharp)
}

/// Flat-spelled chromatic scale. Sharp names such as "C#" are rejected.
pub fn flat_chromatic_scale(tonic: &str) -> Result<Vec<&'static str>, ScaleError> {
    chromatic_scale_with(tonic, Spelling::Flat)
}

/// Chromatic scale in whichever spelling the tonic's key uses
pub fn find_chromatic_scale(tonic: &str) -> Result<Vec<&'static str>, ScaleError> {
    chromatic_scale_with(tonic, select_spelling(tonic))
}

/// Walk `pattern` up from `tonic`.
///
/// The tonic comes first, followed by one note per step, so a seven-step
/// pattern yields eight notes ending on the octave. Pattern characters are
/// checked before the tonic is looked up.
pub fn scale(tonic: &str, pattern: &str) -> Result<Vec<&'static str>, ScaleError> {
    let pattern = Pattern::parse(pattern)?;
    scale_pattern(tonic, &pattern)
}

/// Same as [`scale`] with an already parsed pattern
pub fn scale_pattern(tonic: &str, pattern: &Pattern) -> Result<Vec<&'static str>, ScaleError> {
    let spelling = select_spelling(tonic);
    let root = tonic_index(tonic, spelling)?;
    let notes = spelling.notes();

    Ok(pattern
        .offsets()
        .map(|offset| notes[(root + offset) % NOTE_COUNT])
        .collect())
}

/// Same as [`scale`] for a named scale
pub fn scale_named(tonic: &str, named: NamedScale) -> Result<Vec<&'static str>, ScaleError> {
    scale_pattern(tonic, &named.pattern())
}
