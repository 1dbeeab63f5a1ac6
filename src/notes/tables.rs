/*
Chromatic Note Tables
=====================

The same twelve pitch classes, spelled two ways.

Sharp spelling raises the natural below:  C, C#, D, D#, ...
Flat spelling lowers the natural above:   C, Db, D, Eb, ...

Naturals (C D E F G A B) are identical in both tables, and index N in one
table is the same pitch class as index N in the other:

    index:  0  1   2  3   4  5  6   7  8   9  10  11
    sharp:  C  C#  D  D#  E  F  F#  G  G#  A  A#  B
    flat:   C  Db  D  Eb  E  F  Gb  G  Ab  A  Bb  B

Keys that are conventionally written with flats are listed in FLAT_TONICS.
Uppercase entries are major keys, lowercase entries are minor keys, so "D"
(D major, two sharps) and "d" (D minor, one flat) land on different tables.
*/

use crate::NOTE_COUNT;

pub const SHARP_NOTES: [&str; NOTE_COUNT] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

pub const FLAT_NOTES: [&str; NOTE_COUNT] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Tonics spelled with flats, matched case-sensitively against raw input.
pub const FLAT_TONICS: [&str; 12] = [
    "F", "Bb", "Eb", "Ab", "Db", "Gb", // major
    "d", "g", "c", "f", "bb", "eb", // minor
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naturals_agree_across_spellings() {
        for (sharp, flat) in SHARP_NOTES.iter().zip(FLAT_NOTES.iter()) {
            if sharp.len() == 1 {
                assert_eq!(sharp, flat);
            }
        }
    }

    #[test]
    fn accidentals_name_the_same_pitch_class() {
        // C# / Db sit between C and D
        assert_eq!(SHARP_NOTES[1], "C#");
        assert_eq!(FLAT_NOTES[1], "Db");
        assert_eq!(SHARP_NOTES[10], "A#");
        assert_eq!(FLAT_NOTES[10], "Bb");
    }

    #[test]
    fn tables_have_no_duplicates() {
        for table in [SHARP_NOTES, FLAT_NOTES] {
            for (i, a) in table.iter().enumerate() {
                assert!(table[i + 1..].iter().all(|b| a != b), "{a} repeats");
            }
        }
    }
}
