#![deny(unsafe_code)]
//! CLI binary for the input-color widget core.
//!
//! Subcommands:
//! - `convert <color>` — parse a color string, print every representation
//! - `replay <script>` — apply a JSON event script to a seed color
//! - `list` — print accepted seed formats and named colors

mod error;
mod replay;

use clap::{Parser, Subcommand};
use error::CliError;
use input_color_core::{named, Color};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "input-color", about = "Color picker state engine CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a color string and print every representation.
    Convert {
        /// Hex string, rgb()/rgba() string, or CSS color keyword.
        color: String,
    },
    /// Replay a JSON event script against a seed color.
    Replay {
        /// Path to a JSON array of input events.
        script: PathBuf,

        /// Seed color (hex, rgb()/rgba(), or keyword).
        #[arg(short, long, default_value = "black")]
        seed: String,

        /// Print only the final color instead of every emitted update.
        #[arg(long = "final")]
        final_only: bool,
    },
    /// List accepted seed formats and color keywords.
    List,
}

fn print_color(color: &Color, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(color)?);
    } else {
        println!(
            "{}  rgb({}, {}, {})  hsv({}, {}%, {}%)  alpha {}%  {}",
            color.hex, color.r, color.g, color.b, color.h, color.s, color.v, color.a, color.rgba
        );
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Convert { color } => {
            let color =
                Color::parse(&color).map_err(|e| CliError::Input(e.to_string()))?;
            print_color(&color, cli.json)?;
        }
        Command::Replay {
            script,
            seed,
            final_only,
        } => {
            let seed = Color::parse(&seed)
                .map_err(|e| CliError::Input(format!("invalid --seed: {e}")))?;
            let events = replay::load_script(&script)?;
            let outcome = replay::run_script(seed, &events);

            for (index, reason) in &outcome.rejected {
                eprintln!("event {index} rejected: {reason}");
            }
            if final_only {
                print_color(&outcome.final_color, cli.json)?;
            } else if cli.json {
                println!("{}", serde_json::to_string_pretty(&outcome.emitted)?);
            } else {
                for color in &outcome.emitted {
                    print_color(color, false)?;
                }
            }
        }
        Command::List => {
            let names = named::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "formats": ["#rrggbb", "#rgb", "rgb(r, g, b)", "rgba(r, g, b, a)", "keyword"],
                    "keywords": names,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Formats:");
                println!("  #rrggbb, #rgb, rgb(r, g, b), rgba(r, g, b, a), keyword");
                println!("Keywords:");
                println!("  {}", names.join(", "));
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
