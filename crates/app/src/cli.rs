//! Command-line interface for `roomplan`.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use layout::generator::GenerationRequest;
use save::SaveError;

use crate::headless;

#[derive(Debug, Parser)]
#[command(
    name = "roomplan",
    about = "Headless room-layout editor: generate layouts, export floorplans, diff snapshots",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a starter layout and write it as JSON
    Generate {
        #[command(flatten)]
        request: GenerateArgs,
        /// Where to write the layout JSON
        out: PathBuf,
    },

    /// Render a layout file as an SVG floorplan
    Svg {
        /// Layout JSON to render
        input: PathBuf,
        /// Where to write the SVG
        out: PathBuf,
    },

    /// Compare two layout files
    Diff {
        /// Layout the comparison starts from
        left: PathBuf,
        /// Layout compared against LEFT
        right: PathBuf,
        /// Also write the diff as JSON
        out: Option<PathBuf>,
    },
}

/// Generation flags. Anything left out takes the generator's default.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Number of bedrooms to place
    #[arg(long)]
    pub bedrooms: Option<u32>,
    /// Mood recorded in the layout metadata
    #[arg(long)]
    pub mood: Option<String>,
    /// Free-text description recorded in the layout metadata
    #[arg(long)]
    pub description: Option<String>,
}

impl From<GenerateArgs> for GenerationRequest {
    fn from(args: GenerateArgs) -> Self {
        let defaults = GenerationRequest::default();
        Self {
            description: args.description.unwrap_or(defaults.description),
            mood: args.mood.unwrap_or(defaults.mood),
            bedrooms: args.bedrooms.unwrap_or(defaults.bedrooms),
        }
    }
}

pub fn run(cli: Cli) -> Result<(), SaveError> {
    match cli.command {
        Command::Generate { request, out } => headless::generate(request.into(), &out).map(drop),
        Command::Svg { input, out } => headless::svg(&input, &out).map(drop),
        Command::Diff { left, right, out } => {
            headless::diff(&left, &right, out.as_deref()).map(drop)
        }
    }
}

/// Exit status for a finished command. Failures go to `stderr` directly: an
/// unreadable input fails before the editor app has a log subscriber.
pub fn finish(result: Result<(), SaveError>, stderr: &mut impl Write) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(stderr, "roomplan: {e}");
            1
        }
    }
}
