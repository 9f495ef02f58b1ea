//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::commands;
use tagcheck::output::OutputMode;

/// tagcheck - Struct field tag checker
#[derive(Parser, Debug)]
#[command(
    name = "tagcheck",
    version,
    about = "Struct field tag checker",
    long_about = "Check struct field tags for canonical key:\"value\" syntax.\n\n\
                  Tags must be space-separated key:\"value\" pairs so reflection lookups\n\
                  find their keys. Encoding keys on unexported fields are reported too."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate raw tags (content only, without outer quotes)
    Validate {
        /// Tags to validate
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Print the value of the first occurrence of a key in a raw tag
    Get {
        /// Raw tag
        tag: String,

        /// Key to look up
        key: String,
    },

    /// Check a single field's tag literal
    Field {
        /// Tag literal including its outer quotes, e.g. `json:"id"`
        literal: String,

        /// Field name (omit for an embedded field)
        #[arg(short, long)]
        name: Option<String>,

        /// The field is exported
        #[arg(short, long)]
        exported: bool,

        /// Encoding key to check (repeatable, overrides config)
        #[arg(short, long = "key")]
        keys: Vec<String>,
    },

    /// Check every field in a TOML manifest
    Fields {
        /// Path to the manifest
        path: PathBuf,

        /// Encoding key to check (repeatable, overrides manifest and config)
        #[arg(short, long = "key")]
        keys: Vec<String>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let clean = match cli.command {
        Some(Command::Validate { tags }) => commands::validate(&tags, output_mode),
        Some(Command::Get { tag, key }) => commands::get(&tag, &key, output_mode),
        Some(Command::Field {
            literal,
            name,
            exported,
            keys,
        }) => commands::field(&literal, name.as_deref(), exported, &keys, output_mode),
        Some(Command::Fields { path, keys }) => commands::fields(&path, &keys, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": tagcheck::VERSION
                    })
                );
            } else {
                println!("tagcheck v{}", tagcheck::VERSION);
            }
            Ok(true)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": tagcheck::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("tagcheck v{}", tagcheck::VERSION);
                println!("\nRun 'tagcheck --help' for usage");
            }
            Ok(true)
        },
    }?;

    Ok(if clean { ExitCode::SUCCESS } else { ExitCode::from(1) })
}
