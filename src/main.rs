use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use tally::calculator::{CalculatorModel, copy_to_clipboard, tokenize};
use tally::config::Config;

/// Keypad calculator: feed keys, read the running total.
#[derive(Parser, Debug)]
#[command(name = "tally", version, about)]
struct Cli {
    /// Keys to feed, e.g. `12 + 3.5 x 2`. Reads lines from stdin when empty.
    #[arg(allow_hyphen_values = true)]
    keys: Vec<String>,

    /// Print the readout as JSON.
    #[arg(long)]
    json: bool,

    /// Group the total with thousand separators.
    #[arg(long)]
    separators: bool,

    /// Copy the final total to the clipboard.
    #[arg(long)]
    copy: bool,

    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log model activity to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "tally=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load(path)?,
        None => match Config::default_path() {
            Some(path) => Config::load(&path)?,
            None => Config::default(),
        },
    };

    config.json |= cli.json;
    config.separators |= cli.separators;
    config.copy |= cli.copy;
    Ok(config)
}

/// Feed one typed line into the model.
fn feed_line(model: &mut CalculatorModel, line: &str) -> Result<()> {
    let Some(tokens) = tokenize(line) else {
        bail!("not a keypad input: {line:?}");
    };

    for token in &tokens {
        model
            .process_token(token)
            .with_context(|| format!("rejected key {token:?}"))?;
    }
    debug!(line, tokens = tokens.len(), "line fed");
    Ok(())
}

fn print_readout(model: &CalculatorModel, config: &Config) -> Result<()> {
    let snapshot = model.snapshot();
    let mut out = io::stdout().lock();

    if config.json {
        serde_json::to_writer(&mut out, &snapshot)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", snapshot.render(config.separators))?;
    }
    Ok(())
}

fn run_interactive(model: &mut CalculatorModel, config: &Config) -> Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        match line.trim() {
            "" => continue,
            "q" | "quit" => break,
            "c" | "clear" => model.clear(),
            keys => {
                if let Err(err) = feed_line(model, keys) {
                    warn!("{err:#}");
                    continue;
                }
            }
        }
        print_readout(model, config)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let mut model = CalculatorModel::new();

    if cli.keys.is_empty() {
        run_interactive(&mut model, &config)?;
    } else {
        feed_line(&mut model, &cli.keys.join(" "))?;
        print_readout(&model, &config)?;
    }

    if config.copy {
        let snapshot = model.snapshot();
        copy_to_clipboard(snapshot.text_for_clipboard())?;
        debug!(total = snapshot.text_for_clipboard(), "copied to clipboard");
    }

    Ok(())
}
