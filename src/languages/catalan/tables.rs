//! Tablas de palabras para los números en catalán
//!
//! Todas son constantes; la forma de las tablas ordinales se comprueba en
//! tiempo de compilación.

/// Cardinales 0-29 (masculino)
pub const UNITS: [&str; 30] = [
    "zero", "un", "dos", "tres", "quatre", "cinc", "sis", "set", "vuit", "nou", "deu", "onze",
    "dotze", "tretze", "catorze", "quinze", "setze", "disset", "divuit", "dinou", "vint",
    "vint-i-un", "vint-i-dos", "vint-i-tres", "vint-i-quatre", "vint-i-cinc", "vint-i-sis",
    "vint-i-set", "vint-i-vuit", "vint-i-nou",
];

/// Femenino de 1
pub const FEMININE_ONE: &str = "una";

/// Femenino de 21
pub const FEMININE_TWENTY_ONE: &str = "vint-i-una";

/// Decenas (índice = dígito de las decenas)
pub const TENS: [&str; 10] = [
    "zero", "deu", "vint", "trenta", "quaranta", "cinquanta", "seixanta", "setanta", "vuitanta",
    "noranta",
];

/// Centenas (índice = dígito de las centenas)
pub const HUNDREDS: [&str; 10] = [
    "zero", "cent", "dos-cents", "tres-cents", "quatre-cents", "cinc-cents", "sis-cents",
    "set-cents", "vuit-cents", "nou-cents",
];

/// Centenas en femenino (hoy con el mismo contenido que las masculinas)
pub const FEMININE_HUNDREDS: [&str; 10] = [
    "zero", "cent", "dos-cents", "tres-cents", "quatre-cents", "cinc-cents", "sis-cents",
    "set-cents", "vuit-cents", "nou-cents",
];

/// Decenas ordinales (índice 0 sin uso)
pub const TENS_ORDINAL: [&str; 10] = [
    "", "desè", "vintè", "trentè", "quarantè", "ciquantè", "seixantè", "setantè", "vuitantè",
    "noratè",
];

/// Centenas ordinales (índice 0 sin uso)
pub const HUNDREDS_ORDINAL: [&str; 10] = [
    "", "centè", "dos-centè", "tres-cents", "quatre-cents", "cinc-cents", "sis-cents",
    "set-cents", "vuit-cents", "nou-cents",
];

/// Millares ordinales (índice 0 sin uso)
pub const THOUSANDS_ORDINAL: [&str; 10] = [
    "", "milè", "mil dos-centè", "mil tres-cents", "mil quatre-cents", "mil cinc-cents",
    "mil sis-cents", "mil set-cents", "mil vuit-cents", "mil nou-cents",
];

/// Ordinales irregulares de las unidades 1-9
pub fn unit_ordinal(digit: usize) -> Option<&'static str> {
    match digit {
        1 => Some("primer"),
        2 => Some("segon"),
        3 => Some("tercer"),
        4 => Some("quart"),
        5 => Some("cinquè"),
        6 => Some("sisè"),
        7 => Some("setè"),
        8 => Some("vuitè"),
        9 => Some("novè"),
        _ => None,
    }
}

/// El índice 0 de una tabla ordinal va vacío y el resto no
const fn is_ordinal_table(table: &[&str; 10]) -> bool {
    if !table[0].is_empty() {
        return false;
    }
    let mut i = 1;
    while i < table.len() {
        if table[i].is_empty() {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(is_ordinal_table(&TENS_ORDINAL));
const _: () = assert!(is_ordinal_table(&HUNDREDS_ORDINAL));
const _: () = assert!(is_ordinal_table(&THOUSANDS_ORDINAL));
