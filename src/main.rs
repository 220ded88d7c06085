use std::{fs::read_to_string, path::PathBuf, process, time::Instant};

use clap::Parser;
use dfa_lexer::tokenize_with_diagnostics;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source file to tokenize
    file: PathBuf,

    /// Log every token as it is produced
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("trace")
    } else {
        EnvFilter::from_default_env()
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Failed to set tracing subscriber");
    }

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(err) => {
            error!("Could not read {}: {}", cli.file.display(), err);
            process::exit(1);
        }
    };

    let start = Instant::now();

    let (tokens, diagnostics) = match tokenize_with_diagnostics(&source, file_name) {
        Ok(result) => result,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };

    info!(
        "Tokenized {} tokens with {} diagnostics in {:?}",
        tokens.len(),
        diagnostics.len(),
        start.elapsed()
    );

    for token in &tokens {
        token.debug();
    }

    for diagnostic in &diagnostics {
        eprintln!("{}\n", diagnostic.report());
    }
}
