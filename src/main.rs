use anyhow::{Context, Result, bail};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

use pegger::{CharSet, ParseError, Pattern, char_class, grammars, match_prefix};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to parse (standard input if omitted)
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Grammar to parse with
    #[arg(short, long, default_value = "outline")]
    grammar: String,

    /// Match a run of a predefined character set instead of a grammar
    #[arg(short, long, value_name = "NAME", conflicts_with = "grammar")]
    class: Option<String>,

    /// Fail unless the whole input is consumed
    #[arg(short, long)]
    all: bool,

    /// List the available grammars and exit
    #[arg(short, long)]
    list: bool,

    /// Log matching progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    if !verbose && std::env::var("RUST_LOG").is_err() {
        return;
    }
    let filter = if verbose {
        EnvFilter::new("pegger=trace")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path).with_context(|| format!("Failed to read {path}")),
        None => {
            let mut contents = String::new();
            io::stdin()
                .read_to_string(&mut contents)
                .context("Failed to read stdin")?;
            Ok(contents)
        }
    }
}

fn select_pattern(args: &Args) -> Result<Pattern> {
    if let Some(name) = &args.class {
        let Some(set) = CharSet::named(name) else {
            bail!(
                "Unknown character class '{name}' (available: {}).",
                CharSet::names().join(", ")
            );
        };
        return Ok(char_class(set));
    }
    let Some(pattern) = grammars::by_name(&args.grammar) else {
        bail!(
            "Unknown grammar '{}' (available: {}).",
            args.grammar,
            grammars::names().join(", ")
        );
    };
    Ok(pattern)
}

fn run(args: &Args) -> Result<()> {
    if args.list {
        for name in grammars::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let pattern = select_pattern(args)?;
    let input = read_input(args.file.as_deref())?;

    let m = match_prefix(&input, &pattern)?;
    print!("{}", m.tree);
    if !m.is_complete() {
        if args.all {
            return Err(ParseError::Unconsumed(m.rest.into_owned()).into());
        }
        println!("({} characters unconsumed)", m.rest.chars().count());
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    if let Err(err) = run(&args) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}
