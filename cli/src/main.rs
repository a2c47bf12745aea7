//! deckgen CLI - presentation generation tool
//!
//! A command-line tool for building the bundled pitch deck and inspecting
//! its outline.

use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use deckgen::render::JsonFormat;

/// Programmatic PowerPoint (.pptx) presentation generation
#[derive(Parser)]
#[command(
    name = "deckgen",
    version,
    about = "Generate the bundled pitch deck as a .pptx file",
    long_about = "deckgen - programmatic .pptx presentation generation.\n\n\
                  Builds the ten-slide Sleepwalker pitch deck and writes it as an\n\
                  Office Open XML presentation package."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the pitch deck and write it to a .pptx file
    Build {
        /// Output file path
        #[arg(default_value = deckgen::deck::DEFAULT_OUTPUT)]
        output: PathBuf,
    },

    /// Print the deck outline
    Outline {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output JSON instead of plain text
        #[arg(long)]
        json: bool,

        /// Output compact JSON (no indentation; implies --json)
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Build { output } => {
            let pb = create_spinner("Building deck...");

            let deck = deckgen::deck::pitch_deck();
            pb.set_message("Writing package...");
            deck.save(&output)?;

            pb.finish_and_clear();
            println!(
                "{} Wrote {} slides to {}",
                "✓".green().bold(),
                deck.len(),
                output.display()
            );
        }

        Commands::Outline {
            output,
            json,
            compact,
        } => {
            let deck = deckgen::deck::pitch_deck();

            let content = if json || compact {
                let format = if compact {
                    JsonFormat::Compact
                } else {
                    JsonFormat::Pretty
                };
                deckgen::render::to_json(&deck, format)?
            } else {
                deckgen::render::to_outline(&deck)
            };

            write_output(output.as_ref(), &content)?;
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn print_version() {
    println!("{} {}", "deckgen".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Programmatic PowerPoint (.pptx) presentation generation");
    println!();
    println!("Bundled deck: {}", deckgen::deck::DECK_TITLE);
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            println!(
                "{} Wrote outline to {}",
                "✓".green().bold(),
                p.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
