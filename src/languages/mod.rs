//! Soporte para múltiples idiomas
//!
//! Define el trait común para los conversores de números a palabras de cada idioma.

pub mod catalan;

use crate::forms::{Gender, WordForm};

/// Trait que define las capacidades de un conversor de números a palabras
pub trait NumberToWords {
    /// Código del idioma (ej: "ca")
    fn code(&self) -> &str;

    /// Nombre del idioma
    fn name(&self) -> &str;

    /// Convierte un número a su forma cardinal con el género indicado
    ///
    /// `add_and` existe por paridad con otros idiomas; los que no usan
    /// conjunción entre decenas y unidades lo ignoran.
    fn convert(&self, number: i64, gender: Gender, add_and: bool) -> String;

    /// Igual que [`convert`](Self::convert) con una forma de palabra explícita
    fn convert_with_form(&self, number: i64, form: WordForm, gender: Gender, add_and: bool) -> String {
        let _ = form;
        self.convert(number, gender, add_and)
    }

    /// Convierte un número a su forma ordinal con el género indicado
    fn convert_to_ordinal(&self, number: i32, gender: Gender) -> String;

    /// Igual que [`convert_to_ordinal`](Self::convert_to_ordinal) con una forma de palabra explícita
    fn convert_to_ordinal_with_form(&self, number: i32, form: WordForm, gender: Gender) -> String {
        let _ = form;
        self.convert_to_ordinal(number, gender)
    }

    /// Cardinal con el género por defecto
    fn to_words(&self, number: i64) -> String {
        self.convert(number, Gender::default(), true)
    }

    /// Cardinal con el género por defecto y forma explícita
    fn to_words_with_form(&self, number: i64, form: WordForm) -> String {
        self.convert_with_form(number, form, Gender::default(), true)
    }

    /// Ordinal con el género por defecto
    fn to_ordinal_words(&self, number: i32) -> String {
        self.convert_to_ordinal(number, Gender::default())
    }
}

/// Reduce un código de idioma a su forma canónica ("ca-ES" → "ca", "Català" → "ca")
pub fn canonicalize_language(language: &str) -> String {
    let normalized = language.trim().to_lowercase().replace('_', "-");
    let primary = normalized.split('-').next().unwrap_or_default();
    match primary {
        "ca" | "cat" | "catalan" | "catala" | "català" => "ca".to_string(),
        _ => normalized,
    }
}

/// Crea el conversor del idioma especificado
pub fn get_converter(code: &str) -> Option<Box<dyn NumberToWords>> {
    match canonicalize_language(code).as_str() {
        "ca" => Some(Box::new(catalan::Catalan::new())),
        other => {
            tracing::debug!(language = other, "sin conversor para el idioma");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_language() {
        assert_eq!(canonicalize_language("ca"), "ca");
        assert_eq!(canonicalize_language("Català"), "ca");
        assert_eq!(canonicalize_language("catalan"), "ca");
        assert_eq!(canonicalize_language("ca-ES"), "ca");
        assert_eq!(canonicalize_language("ca_AD"), "ca");
        assert_eq!(canonicalize_language(" ES "), "es");
    }

    #[test]
    fn test_get_converter() {
        let converter = get_converter("ca-ES").expect("catalán debe estar disponible");
        assert_eq!(converter.code(), "ca");
        assert_eq!(converter.name(), "Català");
        assert!(get_converter("es").is_none());
        assert!(get_converter("").is_none());
    }

    #[test]
    fn test_default_gender_helpers() {
        let converter = get_converter("ca").unwrap();
        assert_eq!(converter.to_words(1), "un");
        assert_eq!(converter.to_words_with_form(21, WordForm::Abbreviation), "vint-i-un");
        assert_eq!(converter.to_ordinal_words(2), "segon");
        assert_eq!(
            converter.convert_to_ordinal_with_form(2, WordForm::Normal, Gender::Feminine),
            "segona"
        );
    }
}
