//! Keystop CLI
//!
//! Create, edit, sample and export gradient snapshots.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use keystop_core::{
    check_size, encode, sample, Axis, Edit, Format, Gradient, Rgb, DEFAULT_SIZE, SIZES,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

use config::KeystopConfig;

#[derive(Parser)]
#[command(name = "keystop")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Linear gradient editor with independent color and alpha stops", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./keystop.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a new white-to-black gradient snapshot
    New {
        /// Snapshot file to create
        #[arg(short, long, default_value = "gradient.json")]
        output: PathBuf,

        /// Canvas width
        #[arg(long)]
        width: Option<u32>,

        /// Canvas height
        #[arg(long)]
        height: Option<u32>,

        /// Run the gradient top to bottom
        #[arg(long)]
        vertical: bool,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Sample a snapshot and print it in a text format
    Sample {
        /// Snapshot file
        file: PathBuf,

        /// Output format (hex, hex-string, tuple, css)
        #[arg(short, long)]
        format: Option<Format>,
    },

    /// Render a snapshot to a PNG file or a data URL
    Export {
        /// Snapshot file
        file: PathBuf,

        /// Write a PNG here instead of printing a data URL
        #[arg(long)]
        png: Option<PathBuf>,
    },

    /// Apply one edit to a snapshot in place
    Edit {
        /// Snapshot file
        file: PathBuf,

        #[command(subcommand)]
        command: EditCommands,
    },

    /// Show formats and canvas size presets
    Info,
}

#[derive(Subcommand)]
enum EditCommands {
    /// Add a color stop
    AddColor {
        /// Stop position in [0, 1]
        #[arg(long, conflicts_with = "pixel")]
        at: Option<f32>,

        /// Pixel along the gradient axis, converted to a position
        #[arg(long)]
        pixel: Option<u32>,

        /// #RRGGBB color (defaults to the color currently at that position)
        #[arg(long)]
        color: Option<Rgb>,
    },

    /// Add an alpha stop
    AddAlpha {
        /// Stop position in [0, 1]
        #[arg(long, conflicts_with = "pixel")]
        at: Option<f32>,

        /// Pixel along the gradient axis, converted to a position
        #[arg(long)]
        pixel: Option<u32>,

        /// Opacity in [0, 1] (defaults to the opacity currently at that position)
        #[arg(long)]
        opacity: Option<f32>,
    },

    /// Remove a color stop by index
    RemoveColor { index: usize },

    /// Remove an alpha stop by index
    RemoveAlpha { index: usize },

    /// Move a color stop
    MoveColor {
        index: usize,

        /// New position; values outside [0, 1] are clamped
        #[arg(allow_negative_numbers = true)]
        position: f32,
    },

    /// Move an alpha stop
    MoveAlpha {
        index: usize,

        /// New position; values outside [0, 1] are clamped
        #[arg(allow_negative_numbers = true)]
        position: f32,
    },

    /// Change a color stop's color
    SetColor { index: usize, color: Rgb },

    /// Change an alpha stop's opacity
    SetOpacity { index: usize, opacity: f32 },

    /// Change the canvas size
    Resize { width: u32, height: u32 },

    /// Switch between horizontal and vertical
    Flip,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = match &cli.config {
        Some(path) => KeystopConfig::load(path)?,
        None => KeystopConfig::load_from_dir(&std::env::current_dir()?)?,
    };

    match cli.command {
        Commands::New {
            output,
            width,
            height,
            vertical,
            force,
        } => cmd_new(&config, &output, width, height, vertical, force),

        Commands::Sample { file, format } => {
            cmd_sample(&file, format.unwrap_or(config.output.format))
        }

        Commands::Export { file, png } => cmd_export(&file, png.as_deref()),

        Commands::Edit { file, command } => cmd_edit(&file, command),

        Commands::Info => cmd_info(),
    }
}

fn load_gradient(path: &Path) -> Result<Gradient> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Gradient::from_json(&content).with_context(|| format!("Failed to load {}", path.display()))
}

fn save_gradient(path: &Path, gradient: &Gradient) -> Result<()> {
    let json = gradient.to_json()?;
    fs::write(path, json + "\n").with_context(|| format!("Failed to write {}", path.display()))
}

fn cmd_new(
    config: &KeystopConfig,
    output: &Path,
    width: Option<u32>,
    height: Option<u32>,
    vertical: bool,
    force: bool,
) -> Result<()> {
    if output.exists() && !force {
        anyhow::bail!(
            "'{}' already exists (use --force to overwrite)",
            output.display()
        );
    }

    let width = width.unwrap_or(config.canvas.width);
    let height = height.unwrap_or(config.canvas.height);
    check_size(width, height)?;
    for size in [width, height] {
        if !SIZES.contains(&size) {
            warn!("Size {} is not one of the presets {:?}", size, SIZES);
        }
    }

    let axis = if vertical {
        Axis::Vertical
    } else {
        Axis::from_horizontal(config.canvas.horizontal)
    };

    let gradient = Gradient::default()
        .with_size(width, height)
        .with_axis(axis);
    save_gradient(output, &gradient)?;

    info!("Created {} ({}x{}, {:?})", output.display(), width, height, axis);
    Ok(())
}

fn cmd_sample(file: &Path, format: Format) -> Result<()> {
    let gradient = load_gradient(file)?;
    let samples = sample(&gradient)?;
    info!("Sampled {} pixels as {}", samples.len(), format);
    println!("{}", encode(&samples, format));
    Ok(())
}

fn cmd_export(file: &Path, png: Option<&Path>) -> Result<()> {
    let gradient = load_gradient(file)?;

    match png {
        Some(out) => {
            let img = keystop_export::render(&gradient)?;
            let bytes = keystop_export::encode_png(&img)?;
            fs::write(out, &bytes).with_context(|| format!("Failed to write {}", out.display()))?;
            info!("Wrote {} ({} bytes)", out.display(), bytes.len());
        }
        None => println!("{}", keystop_export::data_url(&gradient)?),
    }

    Ok(())
}

fn resolve_position(gradient: &Gradient, at: Option<f32>, pixel: Option<u32>) -> Result<f32> {
    match (at, pixel) {
        (Some(at), _) => Ok(at),
        (None, Some(pixel)) => Ok(gradient.position_at(pixel)),
        (None, None) => anyhow::bail!("Either --at or --pixel is required"),
    }
}

fn cmd_edit(file: &Path, command: EditCommands) -> Result<()> {
    let gradient = load_gradient(file)?;

    let edit = match command {
        EditCommands::AddColor { at, pixel, color } => Edit::AddColorStop {
            position: resolve_position(&gradient, at, pixel)?,
            color,
        },
        EditCommands::AddAlpha { at, pixel, opacity } => Edit::AddAlphaStop {
            position: resolve_position(&gradient, at, pixel)?,
            opacity,
        },
        EditCommands::RemoveColor { index } => Edit::RemoveColorStop(index),
        EditCommands::RemoveAlpha { index } => Edit::RemoveAlphaStop(index),
        EditCommands::MoveColor { index, position } => Edit::MoveColorStop { index, position },
        EditCommands::MoveAlpha { index, position } => Edit::MoveAlphaStop { index, position },
        EditCommands::SetColor { index, color } => Edit::SetColor { index, color },
        EditCommands::SetOpacity { index, opacity } => Edit::SetOpacity { index, opacity },
        EditCommands::Resize { width, height } => Edit::Resize { width, height },
        EditCommands::Flip => Edit::ToggleAxis,
    };

    let gradient = gradient
        .apply(edit)
        .with_context(|| format!("Cannot apply {:?}", edit))?;
    save_gradient(file, &gradient)?;

    info!(
        "Updated {} ({} color / {} alpha stops)",
        file.display(),
        gradient.color.len(),
        gradient.alpha.len()
    );
    Ok(())
}

fn cmd_info() -> Result<()> {
    println!("Keystop");
    println!("=======");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Formats:");
    for format in Format::ALL {
        let example = format.pixel(Rgb::new(255, 0, 128).with_alpha(64));
        println!("  - {:<10} {}", format.name(), example);
    }
    println!();
    println!("Canvas sizes: {:?} (default {})", SIZES, DEFAULT_SIZE);

    Ok(())
}
