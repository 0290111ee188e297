use std::process;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use numerals::{get_converter, Config, Error};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        // Ayuda, versión y errores de uso los imprime clap
        Err(Error::Cli(e)) => e.exit(),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    init_logging(config.verbose);
    tracing::debug!(?config, "configuración cargada");

    let converter = get_converter(&config.language)
        .ok_or_else(|| Error::UnsupportedLanguage(config.language.clone()))
        .context("Error inicializando el conversor")?;

    for &number in &config.numbers {
        let words = if config.ordinal {
            let number = i32::try_from(number).context("ordinal fuera de rango")?;
            converter.convert_to_ordinal_with_form(number, config.form, config.gender)
        } else {
            converter.convert_with_form(number, config.form, config.gender, true)
        };
        println!("{}", words);
    }

    Ok(())
}
