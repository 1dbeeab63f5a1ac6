#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::tables::{FLAT_NOTES, FLAT_TONICS, SHARP_NOTES};
use crate::NOTE_COUNT;

/// Which accidental a chromatic table is written with
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Spelling {
    /// C, C#, D, D#, ...
    #[default]
    Sharp,
    /// C, Db, D, Eb, ...
    Flat,
}

impl Spelling {
    /// The twelve-note chromatic table for this spelling, starting at C
    pub fn notes(self) -> &'static [&'static str; NOTE_COUNT] {
        match self {
            Spelling::Sharp => &SHARP_NOTES,
            Spelling::Flat => &FLAT_NOTES,
        }
    }

    /// Index of `note` in this spelling's table (exact match)
    pub fn position(self, note: &str) -> Option<usize> {
        self.notes().iter().position(|&n| n == note)
    }

    pub fn name(self) -> &'static str {
        match self {
            Spelling::Sharp => "sharp",
            Spelling::Flat => "flat",
        }
    }
}

impl std::fmt::Display for Spelling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// Pick the table a tonic is written with.
///
/// Must see the tonic exactly as the caller wrote it: the allow-list tells
/// minor keys (lowercase) from major keys (uppercase), so `"d"` is flat while
/// `"D"` is sharp. Normalize only after calling this.
pub fn select_spelling(tonic: &str) -> Spelling {
    if FLAT_TONICS.iter().any(|&t| t == tonic) {
        Spelling::Flat
    } else {
        Spelling::Sharp
    }
}

/// Upper-case the note letter, keep the accidental as written.
///
/// `"bb"` becomes `"Bb"`, `"f#"` becomes `"F#"`, `"C"` is unchanged.
pub fn normalize_tonic(tonic: &str) -> String {
    let mut chars = tonic.chars();
    match chars.next() {
        Some(letter) => letter.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
