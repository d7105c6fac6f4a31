//! # lx80 CLI
//!
//! Command-line interface for making dot-matrix print files.
//!
//! ## Usage
//!
//! ```bash
//! # Convert a picture (reduced to 480 dots wide, threshold 128, 60 dpi)
//! lx80 image photo.png photo.prn
//!
//! # Darker cut-off, narrower output
//! lx80 image photo.png photo.prn --threshold 150 --width 400
//!
//! # ASCII art, doubled, with a border, at 120 dpi
//! lx80 text logo.txt logo.prn --scale 2 --border --dpi 120
//!
//! # Render an existing print file to PNG
//! lx80 preview logo.prn logo.png
//!
//! # Send to the printer
//! cat logo.prn > /dev/usblp0
//! ```
//!
//! Set `RUST_LOG=debug` for more detail.

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lx80::{
    Bitmap, Conversion, EncodingConfig, Lx80Error, PrinterConfig, ResolutionMode,
    frontend::{self, image::ImageOptions},
    preview,
    protocol::decode,
};

/// lx80 - Epson dot-matrix graphics converter
#[derive(Parser, Debug)]
#[command(name = "lx80")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Graphics density
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Dpi {
    /// Single density, ESC K
    #[value(name = "60")]
    Single,
    /// Double density, ESC L
    #[value(name = "120")]
    Double,
}

impl From<Dpi> for ResolutionMode {
    fn from(dpi: Dpi) -> Self {
        match dpi {
            Dpi::Single => ResolutionMode::Mode60,
            Dpi::Double => ResolutionMode::Mode120,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a picture (PNG, JPEG, GIF, ...) to a print file
    Image {
        /// Input image
        input: PathBuf,

        /// Output print file
        output: PathBuf,

        /// Maximum width in dots; wider images are scaled down
        #[arg(
            short,
            long,
            default_value_t = PrinterConfig::LX80.default_image_width,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        width: u32,

        /// Black/white threshold (0-255); darker pixels print
        #[arg(short, long, default_value_t = frontend::image::DEFAULT_THRESHOLD)]
        threshold: u8,

        /// Graphics resolution
        #[arg(short, long, value_enum, default_value_t = Dpi::Single)]
        dpi: Dpi,

        /// Also save the black/white result as PNG
        #[arg(long, value_name = "FILE")]
        png: Option<PathBuf>,
    },

    /// Convert ASCII art (spaces are blank, anything else prints) to a print file
    Text {
        /// Input text file
        input: PathBuf,

        /// Output print file
        output: PathBuf,

        /// Graphics resolution
        #[arg(short, long, value_enum, default_value_t = Dpi::Single)]
        dpi: Dpi,

        /// Scaling factor
        #[arg(
            short,
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..=10)
        )]
        scale: u32,

        /// Add a border around the art
        #[arg(short, long)]
        border: bool,

        /// Also save the final bitmap as PNG
        #[arg(long, value_name = "FILE")]
        png: Option<PathBuf>,
    },

    /// Render the graphics of an existing print file to PNG
    Preview {
        /// Input print file
        input: PathBuf,

        /// Output PNG
        output: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Lx80Error> {
    let cli = Cli::parse();
    let printer = PrinterConfig::LX80;

    match cli.command {
        Commands::Image {
            input,
            output,
            width,
            threshold,
            dpi,
            png,
        } => {
            if !printer.fits(width as usize) {
                warn!(
                    "Width {} is wider than the {} can print ({} dots)",
                    width, printer.name, printer.max_width_dots
                );
            }

            let options = ImageOptions {
                max_width: width,
                threshold,
            };
            let bitmap = frontend::image::load(&input, options)?;
            info!("Image size: {}x{} pixels", bitmap.width(), bitmap.height());

            let conversion = Conversion::new(EncodingConfig::new(dpi.into()));
            write_job(&conversion, &bitmap, &output, png.as_deref())?;
        }

        Commands::Text {
            input,
            output,
            dpi,
            scale,
            border,
            png,
        } => {
            let conversion = Conversion::new(EncodingConfig::new(dpi.into()))
                .border(border)
                .scale(scale);

            let prepared = match frontend::text::load(&input) {
                Ok(art) => {
                    info!("Read ASCII art: {}x{} characters", art.width(), art.height());
                    if border {
                        info!(
                            "Added border: {}x{} characters",
                            art.width() + 2,
                            art.height() + 2
                        );
                    }
                    conversion.prepare(&art)?
                }
                // Empty lines still have a height for the border to frame
                Err(Lx80Error::BlankLines(lines)) if border => {
                    warn!(
                        "{} has {} empty lines; printing the border only",
                        input.display(),
                        lines
                    );
                    conversion.prepare_blank(0, lines)?
                }
                Err(e) => return Err(e),
            };
            if scale > 1 {
                info!(
                    "Scaling by {}x: {}x{} pixels",
                    scale,
                    prepared.width(),
                    prepared.height()
                );
            }

            if !printer.fits(prepared.width()) {
                warn!(
                    "Image width ({}) may be too wide for printer",
                    prepared.width()
                );
                warn!("Consider using a smaller scale factor");
            }

            write_job(&conversion, &prepared, &output, png.as_deref())?;
        }

        Commands::Preview { input, output } => {
            let data = fs::read(&input)?;
            let decoded = decode::parse(&data)?;

            let modes: Vec<String> = decoded.modes.iter().map(|m| m.to_string()).collect();
            info!(
                "Read {} graphics strips ({}) from {}",
                decoded.strips,
                if modes.is_empty() {
                    "no graphics".to_string()
                } else {
                    modes.join(", ")
                },
                input.display()
            );

            preview::save_png(&decoded.bitmap, &output)?;
            info!(
                "Saved {}x{} preview to {}",
                decoded.bitmap.width(),
                decoded.bitmap.height(),
                output.display()
            );
        }
    }

    Ok(())
}

/// Encode a prepared bitmap and write the print file.
///
/// The whole stream is built in memory first, so a failure never leaves a
/// partial print file behind.
fn write_job(
    conversion: &Conversion,
    prepared: &Bitmap,
    output: &Path,
    png: Option<&Path>,
) -> Result<(), Lx80Error> {
    let data = conversion.encode(prepared);

    if let Some(png_path) = png {
        preview::save_png(prepared, png_path)?;
        info!("Saved preview to {}", png_path.display());
    }

    fs::write(output, &data)?;

    let mode = conversion.encoding.resolution_mode;
    info!(
        "Created printer file: {} ({} bytes, {:.2} inches wide at {})",
        output.display(),
        data.len(),
        PrinterConfig::LX80.dots_to_inches(prepared.width(), mode),
        mode
    );
    info!("Send to printer with: cat {} > /dev/usblp0", output.display());
    info!("Or on Windows: COPY /B {} LPT1:", output.display());

    Ok(())
}
