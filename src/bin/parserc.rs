//! Command line front end for the bundled grammars
use clap::{Parser, Subcommand};
use log::debug;
use parserc::ParseError;
use parserc::grammars::{calc, json};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "parserc")]
#[command(about = "Evaluate arithmetic or parse JSON with parserc grammars")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate an arithmetic expression
    Calc {
        /// Expression such as "(2+3)*(7-4)"
        expr: String,
    },
    /// Parse a JSON document and print it back
    Json {
        /// JSON text to parse
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        text: Option<String>,

        /// Read the JSON document from a file instead
        #[arg(long)]
        file: Option<PathBuf>,

        /// Pretty-print the parsed document
        #[arg(long)]
        pretty: bool,
    },
}

fn report(err: &ParseError, source: &str) -> ExitCode {
    eprint!("{}", err.render(source));
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Calc { expr } => match calc::eval(&expr) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            }
            Err(err) => report(&err, &expr),
        },
        Command::Json { text, file, pretty } => {
            let source = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => match fs::read_to_string(&path) {
                    Ok(content) => content,
                    Err(e) => {
                        eprintln!("Error: failed to read {}: {}", path.display(), e);
                        return ExitCode::FAILURE;
                    }
                },
                (None, None) => {
                    eprintln!("Error: expected JSON text or --file");
                    return ExitCode::FAILURE;
                }
            };
            debug!("parsing {} bytes of JSON", source.len());

            let value = match json::parse(&source) {
                Ok(value) => value,
                Err(err) => return report(&err, &source),
            };
            let printed = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };
            match printed {
                Ok(out) => {
                    println!("{out}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}
