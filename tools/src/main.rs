use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use mcwire_tools::{format_report_pretty, inspect_frame};
use wire::Limits;

#[derive(Parser)]
#[command(
    name = "mcwire-tools",
    version,
    about = "memcached binary frame inspection tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect a captured frame's header and segment layout.
    Inspect {
        /// Path to the captured frame bytes.
        frame_path: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = InspectFormat::Pretty)]
        format: InspectFormat,
        /// Decode without enforcing frame limits.
        #[arg(long)]
        unlimited: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectFormat {
    Pretty,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Inspect {
            frame_path,
            format,
            unlimited,
        } => {
            let bytes = fs::read(&frame_path)
                .with_context(|| format!("read frame {}", frame_path.display()))?;
            let limits = if unlimited {
                Limits::unlimited()
            } else {
                Limits::default()
            };
            let report = inspect_frame(&bytes, &limits)
                .with_context(|| format!("inspect frame {}", frame_path.display()))?;
            match format {
                InspectFormat::Pretty => print!("{}", format_report_pretty(&report)),
                InspectFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }
        }
    }
    Ok(())
}
