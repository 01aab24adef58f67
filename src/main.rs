//! pixelwall - checks Pixel Wall-E drawing programs
//!
//! Usage:
//!   pixelwall <file>                     # Lex, parse and analyze a .pw file
//!   pixelwall <file> --canvas-size 64    # Check Spawn against a 64x64 canvas
//!   pixelwall <file> --emit source       # Print the program back in canonical form

use std::{fs, process, time::Instant};

use clap::{Parser, ValueEnum};
use pixelwall::{
    analyzer::analyzer::analyze, display_error, errors::errors::Error, lexer::lexer::tokenize,
    parser::parser::parse,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// One token per line with its position
    Tokens,
    /// The syntax tree in debug form
    Ast,
    /// The program re-printed as source
    Source,
}

#[derive(Parser)]
#[command(name = "pixelwall")]
#[command(version)]
#[command(about = "Checks Pixel Wall-E drawing programs")]
struct Cli {
    /// Input .pw file
    #[arg(value_name = "FILE")]
    file: String,

    /// Width and height of the canvas, used to check the Spawn position
    #[arg(
        long,
        default_value_t = 256,
        value_name = "SIZE",
        value_parser = clap::value_parser!(i64).range(1..)
    )]
    canvas_size: i64,

    /// Print an intermediate form after a successful check
    #[arg(long, value_enum, value_name = "FORM")]
    emit: Option<Emit>,

    /// Log debug output from every stage
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let source = match fs::read_to_string(&cli.file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", cli.file, e);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let (tokens, lex_errors) = tokenize(&source);
    info!("Tokenized in {:?}", start.elapsed());

    if !lex_errors.is_empty() {
        report(&lex_errors, &source, &cli.file);
        process::exit(1);
    }

    if cli.emit == Some(Emit::Tokens) {
        for token in &tokens {
            println!("{}", token);
        }
    }

    let parse_start = Instant::now();
    let program = match parse(tokens) {
        Ok(program) => program,
        Err(error) => {
            report(&[error], &source, &cli.file);
            process::exit(1);
        }
    };
    info!("Parsed in {:?}", parse_start.elapsed());

    let analyze_start = Instant::now();
    let (ok, diagnostics) = analyze(&program, cli.canvas_size);
    info!("Analyzed in {:?}", analyze_start.elapsed());

    report(&diagnostics, &source, &cli.file);
    if !ok {
        process::exit(1);
    }

    match cli.emit {
        Some(Emit::Ast) => println!("{:#?}", program),
        Some(Emit::Source) => println!("{}", program),
        _ => {}
    }

    info!("Checked {} in {:?}", cli.file, start.elapsed());
}

fn report(errors: &[Error], source: &str, file: &str) {
    for error in errors {
        display_error(error, source, file);
    }
}
