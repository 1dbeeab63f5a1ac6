pub mod spelling;
pub mod tables;

pub use spelling::{normalize_tonic, select_spelling, Spelling};
pub use tables::{FLAT_NOTES, FLAT_TONICS, SHARP_NOTES};
