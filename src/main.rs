use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use swish::{errors::errors::Error, lookup_keyword, Band, TokenKind};
use tracing::{debug, error};

mod logging;

use crate::logging::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "swish-tokens", about = "Inspect the Swish token table", version)]
struct Cli {
    /// Log output format (filter with SWISH_LOG)
    #[arg(long, value_enum, default_value = "compact", global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Print every token kind with its spelling, band and precedence
    List {
        /// Only print kinds of this band
        #[arg(long, value_enum)]
        band: Option<BandArg>,
    },
    /// Resolve words through the keyword table
    Lookup {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Show everything known about a kind, given its name or spelling
    Describe { kind: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum BandArg {
    Control,
    Literal,
    Operator,
    Keyword,
}

impl From<BandArg> for Band {
    fn from(band: BandArg) -> Self {
        match band {
            BandArg::Control => Band::Control,
            BandArg::Literal => Band::Literal,
            BandArg::Operator => Band::Operator,
            BandArg::Keyword => Band::Keyword,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_format);

    match cli.command {
        Command::List { band } => {
            for line in list(band.map(Band::from)) {
                println!("{}", line);
            }
        }
        Command::Lookup { words } => {
            for word in &words {
                println!("{}", lookup(word));
            }
        }
        Command::Describe { kind } => match describe(&kind) {
            Ok(text) => println!("{}", text),
            Err(err) => {
                error!(error_name = err.get_error_name(), "describe failed");
                eprintln!("Error: {}", err);
                process::exit(1);
            }
        },
    }
}

fn list(band: Option<Band>) -> Vec<String> {
    debug!(?band, "listing token kinds");

    TokenKind::ALL
        .iter()
        .filter(|kind| band.map_or(true, |band| kind.band() == band))
        .map(|kind| {
            format!(
                "{:<12} {:<12} {:<9} {}",
                kind.name(),
                kind.spelling().unwrap_or("-"),
                kind.band(),
                kind.precedence()
            )
        })
        .collect()
}

fn lookup(word: &str) -> String {
    let kind = lookup_keyword(word);
    debug!(word, kind = kind.name(), "keyword lookup");

    format!("{} -> {}", word, kind.name())
}

fn describe(text: &str) -> Result<String, Error> {
    let kind: TokenKind = text.parse()?;

    Ok(format!(
        "name: {}\nspelling: {}\nband: {}\nprecedence: {}\nliteral: {}\noperator: {}\nkeyword: {}",
        kind.name(),
        kind.spelling().unwrap_or("-"),
        kind.band(),
        kind.precedence(),
        kind.is_literal(),
        kind.is_operator(),
        kind.is_keyword()
    ))
}
