//! Configuración y argumentos CLI

use clap::Parser;

use crate::error::{Error, Result};
use crate::forms::{Gender, WordForm};
use crate::languages::canonicalize_language;

/// Argumentos tal como llegan de la línea de comandos
#[derive(Parser, Debug)]
#[command(name = "numerals")]
#[command(version)]
#[command(about = "Escribe números enteros con palabras", long_about = None)]
#[command(after_help = "EJEMPLOS:\n    numerals 21\n    numerals --gender f 21 1001\n    numerals --ordinal -g feminine 3")]
struct Args {
    /// Números a convertir
    #[arg(required = true, allow_negative_numbers = true)]
    numbers: Vec<String>,

    /// Idioma a usar
    #[arg(short, long = "lang", default_value = "ca")]
    lang: String,

    /// Género gramatical (masculine | feminine)
    #[arg(short, long, default_value = "masculine")]
    gender: String,

    /// Forma de palabra (normal | abbreviation)
    #[arg(short, long, default_value = "normal")]
    form: String,

    /// Escribir ordinales en lugar de cardinales
    #[arg(short, long)]
    ordinal: bool,

    /// Logging de depuración
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Idioma a usar (default: "ca")
    pub language: String,
    /// Género gramatical (default: masculino)
    pub gender: Gender,
    /// Forma de palabra (default: normal)
    pub form: WordForm,
    /// Ordinal en lugar de cardinal
    pub ordinal: bool,
    /// Logging de depuración
    pub verbose: bool,
    /// Números a convertir (argumentos posicionales)
    pub numbers: Vec<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "ca".to_string(),
            gender: Gender::default(),
            form: WordForm::default(),
            ordinal: false,
            verbose: false,
            numbers: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let args = Args::try_parse_from(args)?;

        let numbers = args
            .numbers
            .iter()
            .map(|raw| Self::parse_number(raw, args.ordinal))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            language: canonicalize_language(&args.lang),
            gender: args.gender.parse()?,
            form: args.form.parse()?,
            ordinal: args.ordinal,
            verbose: args.verbose,
            numbers,
        })
    }

    /// Los ordinales se limitan al rango de i32
    fn parse_number(raw: &str, ordinal: bool) -> Result<i64> {
        let cleaned: String = raw.chars().filter(|c| *c != '_').collect();
        let number: i64 = cleaned.trim().parse().map_err(|e: std::num::ParseIntError| {
            Error::InvalidNumber {
                input: raw.to_string(),
                reason: e.to_string(),
            }
        })?;

        if ordinal && i32::try_from(number).is_err() {
            return Err(Error::InvalidNumber {
                input: raw.to_string(),
                reason: "los ordinales deben caber en 32 bits".to_string(),
            });
        }
        Ok(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config> {
        Config::from_args(std::iter::once("numerals").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["21"]).unwrap();
        assert_eq!(config.language, "ca");
        assert_eq!(config.gender, Gender::Masculine);
        assert_eq!(config.form, WordForm::Normal);
        assert!(!config.ordinal);
        assert_eq!(config.numbers, vec![21]);
    }

    #[test]
    fn test_all_options() {
        let config = parse(&["-l", "Català", "-g", "f", "-f", "abbr", "-o", "-v", "1", "2"]).unwrap();
        assert_eq!(config.language, "ca");
        assert_eq!(config.gender, Gender::Feminine);
        assert_eq!(config.form, WordForm::Abbreviation);
        assert!(config.ordinal);
        assert!(config.verbose);
        assert_eq!(config.numbers, vec![1, 2]);
    }

    #[test]
    fn test_negative_and_underscored_numbers() {
        let config = parse(&["-5", "1_000_000"]).unwrap();
        assert_eq!(config.numbers, vec![-5, 1_000_000]);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(parse(&["dotze"]), Err(Error::InvalidNumber { .. })));
        assert!(matches!(parse(&["-g", "x", "1"]), Err(Error::InvalidGender(_))));
        assert!(matches!(parse(&["-f", "x", "1"]), Err(Error::InvalidWordForm(_))));
        assert!(matches!(parse(&["--ordinal", "3000000000"]), Err(Error::InvalidNumber { .. })));
        assert!(matches!(parse(&[]), Err(Error::Cli(_))));
    }
}
