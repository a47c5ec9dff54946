//! Kilo Spell - Main entrypoint.
//!
//! Loads configuration, initializes logging, builds the dictionary from the
//! configured word list, and runs the requested command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use kilo_spell_lib::config::{ConfigLoader, KiloConfig, LogConfig, ENV_PREFIX};
use kilo_spell_lib::dictionary::WordEncoding;
use kilo_spell_lib::error::config::ConfigError;
use kilo_spell_lib::error::{
    report_error, set_error_reporter, ErrorContext, KiloError, TracingErrorReporter,
};

/// Command line arguments for the Kilo spell checker.
#[derive(Parser, Debug)]
#[clap(name = "kilo_spell", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to load, overriding the configuration
    #[clap(short, long, value_parser)]
    words: Option<PathBuf>,

    /// Encoding of the word list (latin1, ascii, utf8)
    #[clap(short, long, value_parser)]
    encoding: Option<WordEncoding>,

    /// Enumerate words in first-insertion order instead of sorted order
    #[clap(long)]
    unordered: bool,

    /// Skip word-list lines that cannot be stored instead of failing
    #[clap(long)]
    skip_unencodable: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Spell check text given as arguments, or a line read from stdin
    Check {
        /// Text to check
        text: Vec<String>,

        /// Exit with status 1 when any word is not found
        #[clap(long)]
        strict: bool,

        /// Print the report as JSON
        #[clap(long)]
        json: bool,
    },

    /// Look up individual words
    Lookup {
        /// Words to look up
        #[clap(required = true)]
        words: Vec<String>,
    },

    /// List the words in the dictionary
    List {
        /// Only list words starting with this prefix
        #[clap(short, long)]
        prefix: Option<String>,

        /// Print one word per line
        #[clap(long, conflicts_with = "json")]
        lines: bool,

        /// Print a JSON array
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.context("Failed to set global tracing subscriber")
}

/// Applies command-line overrides on top of the loaded configuration.
fn apply_overrides(config: &mut KiloConfig, args: &Args) {
    if let Some(words) = &args.words {
        config.dictionary.word_list = words.clone();
    }
    if let Some(encoding) = args.encoding {
        config.dictionary.encoding = encoding;
    }
    if args.unordered {
        config.dictionary.ordered = false;
    }
    if args.skip_unencodable {
        config.dictionary.skip_unencodable = true;
    }
}

/// Reads one line of text to check from stdin.
fn prompt_for_text() -> anyhow::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "Input text to be spell checked: ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read text from stdin")?;
    Ok(line)
}

fn run(args: Args) -> anyhow::Result<i32> {
    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let command = args.command.as_ref();

    if let Some(Command::GenConfig { output }) = command {
        info!("Generating default configuration");
        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let toml = toml::to_string_pretty(&KiloConfig::default())
            .map_err(|e| KiloError::from(ConfigError::SerializeError(e.to_string())))?;
        std::fs::write(output, toml)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        info!("Default configuration written to {:?}", output);
        return Ok(0);
    }

    let mut config = loader.load().map_err(KiloError::from)?;
    apply_overrides(&mut config, &args);
    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    if let Some(Command::Validate) = command {
        info!("Configuration validated successfully");
        println!("Configuration is valid");
        return Ok(0);
    }

    let checker = kilo_spell_lib::build_checker(&config).map_err(|e| {
        let context = ErrorContext::new(e, "dictionary")
            .with_details(format!("word list {}", config.dictionary.word_list.display()));
        report_error(&context);
        anyhow::anyhow!("{}", context.error)
    })?;
    info!(words = checker.dictionary().len(), "Dictionary loaded");

    match args.command.unwrap_or(Command::Check {
        text: Vec::new(),
        strict: false,
        json: false,
    }) {
        Command::Check { text, strict, json } => {
            let text = if text.is_empty() {
                prompt_for_text()?
            } else {
                text.join(" ")
            };
            let report = checker.check(&text);
            if json {
                println!("{}", serde_json::to_string(&report).map_err(KiloError::from)?);
            } else {
                print!("{report}");
            }

            let strict = strict || config.checker.strict;
            Ok(if strict && !report.is_clean() { 1 } else { 0 })
        }
        Command::Lookup { words } => {
            for word in words {
                if checker.is_known(&word) {
                    println!("'{word}' found");
                } else {
                    println!("'{word}' not found");
                }
            }
            Ok(0)
        }
        Command::List {
            prefix,
            lines,
            json,
        } => {
            let dictionary = checker.dictionary();
            let words: Vec<String> = match &prefix {
                Some(prefix) => dictionary.words_with_prefix(prefix).collect(),
                None => dictionary.words().collect(),
            };

            if json {
                println!("{}", serde_json::to_string(&words).map_err(KiloError::from)?);
            } else if lines {
                for word in &words {
                    println!("{word}");
                }
            } else {
                println!("{}", words.join(", "));
            }
            Ok(0)
        }
        Command::Validate | Command::GenConfig { .. } => Ok(0),
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    match run(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
