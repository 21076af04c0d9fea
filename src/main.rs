use caesar::alphabet::Language;
use caesar::cipher::Intent;
use caesar::cli::notices::{conditions, information, warranty};
use caesar::cli::{complete_request, execute, expand_clusters, OutputFormat, Prompter, Request, Source};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Version info from build.rs
const VERSION: &str = env!("CAESAR_VERSION");
const BUILD: &str = env!("CAESAR_BUILD");
const PROFILE: &str = env!("CAESAR_PROFILE");
const GIT_HASH: &str = env!("CAESAR_GIT_HASH");

const AFTER_HELP: &str = "\
Without arguments every option is asked for interactively.

Value flags may be grouped; their values follow the group in the same order:
  caesar -esl word 5          same as: caesar -e -s word -l 5

Examples:
  caesar -e -s word
  caesar -es word
  caesar -e -s word -l 5
  caesar -esl word 5
  caesar -e -k sp -s word -l 5
  caesar -eksl sp word 5
  caesar -es \"my text\"
  caesar -esl \"my text\" 5
  caesar -d -s word -l 5
  caesar -dsl word 5
  caesar -dksl sp word 5
  caesar -e -f file.txt
  caesar -ef file.txt
  caesar -efl file.txt 5
  caesar -ekfl sp file.txt 5
  caesar -dfl \"my file.txt\" 5
  caesar -dkfl sp \"my file.txt\" 5";

#[derive(Parser)]
#[command(name = "caesar")]
#[command(about = "Caesar cipher over English and Spanish alphabets", long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Show program information
    #[arg(short = 'i', long)]
    info: bool,

    /// Show the warranty notice
    #[arg(short = 'w', long)]
    warranty: bool,

    /// Show the license conditions
    #[arg(short = 'c', long)]
    conditions: bool,

    /// Encrypt the message
    #[arg(short = 'e', long, conflicts_with = "decrypt")]
    encrypt: bool,

    /// Decrypt the message
    #[arg(short = 'd', long)]
    decrypt: bool,

    /// Text string to transform
    #[arg(
        short = 's',
        long = "string",
        value_name = "TEXT",
        conflicts_with = "file",
        allow_hyphen_values = true
    )]
    text: Option<String>,

    /// Text file to transform
    #[arg(short = 'f', long, value_name = "PATH", allow_hyphen_values = true)]
    file: Option<PathBuf>,

    /// Alphabet: en (English) or sp (Spanish). English by default
    #[arg(short = 'k', long, env = "CAESAR_LANGUAGE", value_parser = parse_language)]
    language: Option<Language>,

    /// Specific level. Every level is shown when omitted
    #[arg(short = 'l', long, allow_hyphen_values = true)]
    level: Option<String>,

    /// Output format: text or json
    #[arg(long, default_value = "text", value_parser = parse_format)]
    format: OutputFormat,
}

fn parse_language(s: &str) -> Result<Language, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("CAESAR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let interactive = std::env::args_os().len() <= 1;
    // clusters like `-esl word 5` are spelled out before clap sees them
    let cli = Cli::parse_from(expand_clusters(std::env::args_os()));

    if cli.version {
        println!("caesar {} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH);
        return ExitCode::SUCCESS;
    }
    if cli.info {
        print!("{}", information());
        return ExitCode::SUCCESS;
    }
    if cli.warranty {
        print!("{}", warranty());
        return ExitCode::SUCCESS;
    }
    if cli.conditions {
        print!("{}", conditions());
        return ExitCode::SUCCESS;
    }

    if interactive {
        print!("{}", information());
    }

    let intent = match (cli.encrypt, cli.decrypt) {
        (true, _) => Some(Intent::Encrypt),
        (_, true) => Some(Intent::Decrypt),
        _ => None,
    };
    let source = match (cli.text, cli.file) {
        (Some(text), _) => Some(Source::Text(text)),
        (_, Some(path)) => Some(Source::File(path)),
        _ => None,
    };
    let request = Request {
        intent,
        language: cli.language,
        source,
        level: cli.level,
    };

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    let result = complete_request(request, &mut prompter, interactive)
        .and_then(|job| execute(&job, cli.format));

    match result {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
