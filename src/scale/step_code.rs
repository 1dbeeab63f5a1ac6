/*
Step Patterns
=============

A pattern spells out a scale as the distances between consecutive degrees,
one character per step:

    m = minor second     (1 semitone)
    M = major second     (2 semitones)
    A = augmented second (3 semitones)

Example:
    "MMmMMMm" = major scale       C D E F G A B C
    "MmMMmAm" = harmonic minor    A B C D E F G# A

The pattern only says how far to move; which note names come out depends on
the tonic's chromatic table.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::ScaleError;

/// One step of a scale pattern
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepCode {
    /// `m`: half step
    Minor,
    /// `M`: whole step
    Major,
    /// `A`: step and a half
    Augmented,
}

impl StepCode {
    pub const fn semitones(self) -> usize {
        match self {
            StepCode::Minor => 1,
            StepCode::Major => 2,
            StepCode::Augmented => 3,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            StepCode::Minor => 'm',
            StepCode::Major => 'M',
            StepCode::Augmented => 'A',
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'm' => Some(StepCode::Minor),
            'M' => Some(StepCode::Major),
            'A' => Some(StepCode::Augmented),
            _ => None,
        }
    }
}

impl std::fmt::Display for StepCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An ordered run of steps, read left to right from the tonic
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pattern {
    steps: Vec<StepCode>,
}

impl Pattern {
    pub fn new(steps: Vec<StepCode>) -> Self {
        Self { steps }
    }

    /// Parse a pattern string like `"MMmMMMm"`.
    /// Fails on the first character that is not a step code.
    pub fn parse(symbols: &str) -> Result<Self, ScaleError> {
        let steps = symbols
            .chars()
            .enumerate()
            .map(|(position, code)| {
                StepCode::from_symbol(code)
                    .ok_or(ScaleError::InvalidStepCode { code, position })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[StepCode] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total distance covered by the pattern, in semitones
    pub fn semitones(&self) -> usize {
        self.steps.iter().map(|s| s.semitones()).sum()
    }

    /// Distance of each degree from the tonic, tonic (0) first
    pub fn offsets(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::once(0).chain(self.steps.iter().scan(0, |offset, step| {
            *offset += step.semitones();
            Some(*offset)
        }))
    }
}

impl From<&[StepCode]> for Pattern {
    fn from(steps: &[StepCode]) -> Self {
        Self::new(steps.to_vec())
    }
}

impl std::str::FromStr for Pattern {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::parse(s)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for step in &self.steps {
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}
