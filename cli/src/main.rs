use std::path::PathBuf;
use std::process;

use clap::Parser;
use lexscan::{LexError, TokenSet};
use owo_colors::OwoColorize;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

const TYPE_WIDTH: usize = 20;
const TEXT_WIDTH: usize = 50;

#[derive(Parser, Debug)]
#[command(name = "lexscan", about = "Split source code into classified tokens")]
struct Cli {
    /// Source code file path
    source: PathBuf,
    /// Print debugging messages
    #[arg(short, long)]
    debug: bool,
    /// Print the tokens as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    debug!(?cli, "received arguments");
    info!("source code to parse: {}", cli.source.display());

    let tokens = match lexscan::lex_path(&cli.source) {
        Ok(tokens) => tokens,
        Err(LexError::Scan(err)) => {
            for syntax_error in err.errors() {
                error!("{syntax_error}");
            }
            error!("failed to parse path");
            process::exit(1);
        }
        Err(LexError::Io { path, source }) => {
            error!("could not read '{}': {source}", path.display());
            process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&tokens) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!("could not serialize tokens: {err}");
                process::exit(1);
            }
        }
        return;
    }

    println!();
    print!("{}", render_table(&tokens));
}

/// `RUST_LOG` takes precedence over the `--debug` flag.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn render_table(tokens: &TokenSet) -> String {
    let header = format!("{:<TYPE_WIDTH$}{:<TEXT_WIDTH$}", "Type", "Text");
    let mut out = format!("{}\n", header.bold());
    out.push_str(&"-".repeat(TYPE_WIDTH + TEXT_WIDTH));
    out.push('\n');
    for token in tokens {
        out.push_str(&format_row(token.kind.as_str(), &token.text));
    }
    out
}

fn format_row(kind: &str, text: &str) -> String {
    format!("{kind:<TYPE_WIDTH$}{text:<TEXT_WIDTH$}\n")
}
