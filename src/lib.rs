//! Numerals - Biblioteca de conversión de números a palabras
//!
//! Escribe enteros con palabras (cardinales y ordinales, con concordancia de
//! género). Hoy incluye el catalán.

pub mod config;
pub mod error;
pub mod forms;
pub mod languages;

pub use config::Config;
pub use error::{Error, Result};
pub use forms::{Gender, WordForm};
pub use languages::catalan::Catalan;
pub use languages::{get_converter, NumberToWords};
