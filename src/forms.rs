//! Género gramatical y forma de palabra

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Género gramatical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    #[default]
    Masculine,
    Feminine,
}

impl Gender {
    pub fn is_feminine(self) -> bool {
        self == Gender::Feminine
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "masc" | "masculine" | "masculino" | "masculí" | "masculi" => {
                Ok(Gender::Masculine)
            }
            "f" | "fem" | "feminine" | "femenino" | "femení" | "femeni" => Ok(Gender::Feminine),
            _ => Err(Error::InvalidGender(s.to_string())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Masculine => write!(f, "masculine"),
            Gender::Feminine => write!(f, "feminine"),
        }
    }
}

/// Forma de la palabra (completa o abreviada)
///
/// Los conversores que no distinguen formas la aceptan y la ignoran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WordForm {
    #[default]
    Normal,
    Abbreviation,
}

impl FromStr for WordForm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" | "n" => Ok(WordForm::Normal),
            "abbreviation" | "abbr" | "abreviatura" | "a" => Ok(WordForm::Abbreviation),
            _ => Err(Error::InvalidWordForm(s.to_string())),
        }
    }
}

impl fmt::Display for WordForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordForm::Normal => write!(f, "normal"),
            WordForm::Abbreviation => write!(f, "abbreviation"),
        }
    }
}
