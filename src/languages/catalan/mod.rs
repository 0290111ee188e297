//! Implementación del idioma catalán
//!
//! Cardinales hasta la escala de los miles de millones y ordinales hasta 9999.
//! Por encima de 9999 los ordinales se escriben como cardinales.

mod tables;

use crate::forms::Gender;
use crate::languages::NumberToWords;

use tables::{
    unit_ordinal, FEMININE_HUNDREDS, FEMININE_ONE, FEMININE_TWENTY_ONE, HUNDREDS,
    HUNDREDS_ORDINAL, TENS, TENS_ORDINAL, THOUSANDS_ORDINAL, UNITS,
};

/// Mayor número con forma ordinal propia
const MAX_ORDINAL: i32 = 9999;

const BILLION: u64 = 1_000_000_000;
const MILLION: u64 = 1_000_000;
const THOUSAND: u64 = 1_000;
const HUNDRED: u64 = 100;

#[derive(Debug, Clone, Copy, Default)]
pub struct Catalan;

impl Catalan {
    pub fn new() -> Self {
        Self
    }

    /// Cardinal de un valor absoluto
    fn cardinal(&self, number: u64, gender: Gender) -> String {
        if number == 0 {
            return UNITS[0].to_string();
        }

        let mut number = number;
        let mut parts: Vec<String> = Vec::new();

        let billions = number / BILLION;
        if billions > 0 {
            parts.push(if billions == 1 {
                "mil milions".to_string()
            } else {
                format!("{} mil milions", self.cardinal(billions, Gender::Masculine))
            });
            number %= BILLION;
        }

        let millions = number / MILLION;
        if millions > 0 {
            parts.push(if millions == 1 {
                "un milió".to_string()
            } else {
                format!("{} milions", self.cardinal(millions, Gender::Masculine))
            });
            number %= MILLION;
        }

        let thousands = number / THOUSAND;
        if thousands > 0 {
            // El género sí se propaga a los miles: "vint-i-una mil"
            parts.push(if thousands == 1 {
                "mil".to_string()
            } else {
                format!("{} mil", self.cardinal(thousands, gender))
            });
            number %= THOUSAND;
        }

        let hundreds = (number / HUNDRED) as usize;
        if hundreds > 0 {
            let word = if number == HUNDRED {
                "cent"
            } else if gender.is_feminine() {
                FEMININE_HUNDREDS[hundreds]
            } else {
                HUNDREDS[hundreds]
            };
            parts.push(word.to_string());
            number %= HUNDRED;
        }

        if number > 0 {
            parts.push(Self::below_hundred(number as usize, gender));
        }

        parts.join(" ")
    }

    /// Cardinal de 1-99
    fn below_hundred(number: usize, gender: Gender) -> String {
        if number < UNITS.len() {
            return match (gender, number) {
                (Gender::Feminine, 1) => FEMININE_ONE.to_string(),
                (Gender::Feminine, 21) => FEMININE_TWENTY_ONE.to_string(),
                _ => UNITS[number].to_string(),
            };
        }

        let mut word = TENS[number / 10].to_string();
        let units = number % 10;
        if units == 1 && gender.is_feminine() {
            word.push_str(" una");
        } else if units > 0 {
            word.push('-');
            word.push_str(UNITS[units]);
        }
        word
    }

    /// "menys" + cardinal masculino del valor absoluto
    fn negative(&self, magnitude: u64) -> String {
        format!("menys {}", self.cardinal(magnitude, Gender::Masculine))
    }
}

/// Paso de ordinal masculino a femenino: quita las "o" finales y añade "a"
fn feminine_ordinal(word: &str, gender: Gender) -> String {
    if gender.is_feminine() {
        format!("{}a", word.trim_end_matches('o'))
    } else {
        word.to_string()
    }
}

impl NumberToWords for Catalan {
    fn code(&self) -> &str {
        "ca"
    }

    fn name(&self) -> &str {
        "Català"
    }

    fn convert(&self, number: i64, gender: Gender, _add_and: bool) -> String {
        if number < 0 {
            // El género no se conserva al negar: "menys un", nunca "menys una"
            tracing::trace!(number, %gender, "cardinal negativo en masculino");
            return self.negative(number.unsigned_abs());
        }
        self.cardinal(number as u64, gender)
    }

    fn convert_to_ordinal(&self, number: i32, gender: Gender) -> String {
        if number > MAX_ORDINAL {
            tracing::debug!(number, "ordinal fuera de rango, se usa el cardinal");
            return self.convert(i64::from(number), gender, true);
        }

        if number < 0 {
            return self.negative(u64::from(number.unsigned_abs()));
        }

        if number == 0 {
            return UNITS[0].to_string();
        }

        let mut number = number as usize;
        let mut parts: Vec<String> = Vec::new();

        if number / 1000 > 0 {
            parts.push(feminine_ordinal(THOUSANDS_ORDINAL[number / 1000], gender));
            number %= 1000;
        }

        if number / 100 > 0 {
            parts.push(feminine_ordinal(HUNDREDS_ORDINAL[number / 100], gender));
            number %= 100;
        }

        if number / 10 > 0 {
            parts.push(feminine_ordinal(TENS_ORDINAL[number / 10], gender));
            number %= 10;
        }

        if let Some(word) = unit_ordinal(number) {
            parts.push(feminine_ordinal(word, gender));
        }

        parts.join(" ")
    }
}
