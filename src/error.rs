//! Errores de la biblioteca
//!
//! La conversión de números nunca falla; estos errores solo aparecen al
//! interpretar texto de entrada (códigos de idioma, género, argumentos).

/// Errores de configuración y de análisis de entrada
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Idioma no soportado: {0}")]
    UnsupportedLanguage(String),

    #[error("Género gramatical no válido: {0}")]
    InvalidGender(String),

    #[error("Forma de palabra no válida: {0}")]
    InvalidWordForm(String),

    #[error("Número no válido '{input}': {reason}")]
    InvalidNumber { input: String, reason: String },

    #[error(transparent)]
    Cli(#[from] clap::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
