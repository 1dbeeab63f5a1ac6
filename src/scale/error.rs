use crate::notes::Spelling;

/// Errors that can occur when looking up notes or building a scale
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaleError {
    /// Pattern character outside `m`, `M`, `A`
    InvalidStepCode { code: char, position: usize },
    /// Tonic is not spelled the way the lookup table spells it
    /// (`spelling` is None when the table was supplied by the caller)
    TonicNotFound {
        tonic: String,
        spelling: Option<Spelling>,
    },
    /// Name does not match any known scale
    UnknownScaleName(String),
}

impl std::fmt::Display for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleError::InvalidStepCode { code, position } => {
                write!(
                    f,
                    "Invalid step code {:?} at position {} (expected 'm', 'M' or 'A')",
                    code, position
                )
            }
            ScaleError::TonicNotFound {
                tonic,
                spelling: Some(spelling),
            } => {
                write!(
                    f,
                    "Tonic {:?} not found in the {} chromatic table",
                    tonic, spelling
                )
            }
            ScaleError::TonicNotFound {
                tonic,
                spelling: None,
            } => {
                write!(f, "Tonic {:?} not found in scale", tonic)
            }
            ScaleError::UnknownScaleName(name) => {
                write!(f, "Unknown scale name {:?}", name)
            }
        }
    }
}

impl std::error::Error for ScaleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = ScaleError::InvalidStepCode {
            code: 'x',
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "Invalid step code 'x' at position 3 (expected 'm', 'M' or 'A')"
        );

        let err = ScaleError::TonicNotFound {
            tonic: "C#".to_string(),
            spelling: Some(Spelling::Flat),
        };
        assert_eq!(
            err.to_string(),
            "Tonic \"C#\" not found in the flat chromatic table"
        );

        let err = ScaleError::TonicNotFound {
            tonic: "H".to_string(),
            spelling: None,
        };
        assert_eq!(err.to_string(), "Tonic \"H\" not found in scale");
    }

    #[test]
    fn is_a_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(ScaleError::UnknownScaleName("klezmer".to_string()));
        assert_eq!(err.to_string(), "Unknown scale name \"klezmer\"");
    }
}
