//! Command line front end for a gettext locale directory.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{
    Parser,
    Subcommand,
};
use po_repository::config::ConfigManager;
use po_repository::{
    PoTranslationRepository,
    TranslationRepository,
};
use tracing_subscriber::EnvFilter;

/// Inspect and normalize gettext translation files.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding `.po-repository.json`.
    #[arg(long, default_value = ".")]
    workspace: PathBuf,

    /// Locale root, overriding the configured `localeDirectory`.
    #[arg(long)]
    locale_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List language tags found under the locale root.
    Languages,
    /// Print a parsed translation as JSON.
    Show {
        tag: String,
        /// Only print the id → message map of translated items.
        #[arg(long)]
        translated_only: bool,
    },
    /// Parse and rewrite a translation in canonical order.
    Normalize { tag: String },
    /// Exit with status 0 if the language has a translation file.
    Exists { tag: String },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(&args.workspace)?;
    if let Some(locale_dir) = args.locale_dir {
        config_manager.override_locale_directory(locale_dir)?;
    }

    let repository = PoTranslationRepository::from_config(&config_manager)?;
    let mut stdout = std::io::stdout().lock();

    match args.command {
        Command::Languages => {
            for language in repository.list_languages()? {
                writeln!(stdout, "{language}")?;
            }
        }
        Command::Show { tag, translated_only } => {
            let translation = repository.parse(&tag)?;
            let json = if translated_only {
                let messages: BTreeMap<_, _> =
                    translation.translated_messages().into_iter().collect();
                serde_json::to_string_pretty(&messages)?
            } else {
                serde_json::to_string_pretty(&translation)?
            };
            writeln!(stdout, "{json}")?;
        }
        Command::Normalize { tag } => {
            let translation = repository.parse(&tag)?;
            repository.save(&translation)?;
            tracing::info!(tag, items = translation.len(), "Normalized translation");
        }
        Command::Exists { tag } => {
            if !repository.exists(&tag) {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
