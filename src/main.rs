use anyhow::Context;
use clap::{Parser, Subcommand};
use freedraw::config::{Config, MAX_CANVAS_SIDE, MIN_CANVAS_SIDE};
use freedraw::draw::Canvas;
use freedraw::export::{self, ExportOptions};
use freedraw::input::InputState;
use freedraw::script::GestureScript;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("FREEDRAW_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "freedraw")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Freehand drawing canvas with pen, eraser, undo and PNG export")]
struct Cli {
    /// Read settings from this file instead of ~/.config/freedraw/config.toml
    #[arg(long, short = 'c', value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a recorded gesture script and export canvas.png
    Replay {
        /// JSON gesture script
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Directory for canvas.png (overrides [export].directory)
        #[arg(long, short = 'o', value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Canvas width in pixels (overrides [canvas].width)
        #[arg(long, value_parser = canvas_side())]
        width: Option<u32>,

        /// Canvas height in pixels (overrides [canvas].height)
        #[arg(long, value_parser = canvas_side())]
        height: Option<u32>,
    },
}

/// Same bounds `[canvas]` is clamped to.
fn canvas_side() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(i64::from(MIN_CANVAS_SIDE)..=i64::from(MAX_CANVAS_SIDE))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("freedraw: Freehand drawing canvas");
        println!();
        println!("Usage:");
        println!("  freedraw replay <SCRIPT> [-o DIR]   Replay a gesture script and write canvas.png");
        println!("  freedraw --help                      Show help");
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match command {
        Command::Replay {
            script,
            output_dir,
            width,
            height,
        } => {
            let gestures = GestureScript::load(&script)
                .with_context(|| format!("Failed to load script {}", script.display()))?;

            let mut input = InputState::from_config(&config.drawing);
            let mut canvas = Canvas::new(
                width.unwrap_or(config.canvas.width),
                height.unwrap_or(config.canvas.height),
            )
            .context("Failed to create canvas surface")?
            .with_tension(config.drawing.tension);

            let summary = gestures
                .replay(&mut input, &mut canvas)
                .with_context(|| format!("Failed to replay {}", script.display()))?;
            log::info!(
                "Replayed {} actions into {} strokes",
                summary.actions,
                summary.strokes
            );

            let mut options = ExportOptions::from_config(&config.export);
            if let Some(dir) = output_dir {
                options.directory = dir;
            }
            let path = export::export_png(&canvas, &options).context("Failed to export canvas")?;
            println!("Saved {}", path.display());
        }
    }

    Ok(())
}
