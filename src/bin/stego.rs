//! # Stego Binary Entry Point
//!
//! Hides text in images and reads it back.
//!
//! ## Usage
//!
//! ```bash
//! stego encode --input cover.png --message "hello" --output fingerprint.png
//! stego decode --input fingerprint.png
//! stego capacity --input cover.png --json
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::{info, LevelFilter};

use lsb_stego::codec;
use lsb_stego::common::config::StegoConfig;
use lsb_stego::common::report::{self, CapacityReport, DecodeReport, EncodeReport};
use lsb_stego::processing::{
    embed_text, extract_text, to_data_url, Extraction, ImageCodec, OutputFormat, PixelBuffer,
    PixelCodec,
};

/// Command-line arguments for the stego binary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a configuration file (TOML format)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level regardless of the configuration
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hide a message in an image
    Encode {
        /// Cover image
        #[arg(short, long)]
        input: PathBuf,

        /// Text to hide
        #[arg(short, long)]
        message: String,

        /// Where to write the encoded image (defaults to the configured file name,
        /// with the extension of the output format)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output image format (overrides the configuration)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Also print the encoded image as a data URL
        #[arg(long)]
        data_url: bool,

        /// Print a JSON summary
        #[arg(long)]
        json: bool,
    },

    /// Read a hidden message from an image
    Decode {
        #[arg(short, long)]
        input: PathBuf,

        /// Print a JSON summary
        #[arg(long)]
        json: bool,
    },

    /// Show how much text an image can hold
    Capacity {
        #[arg(short, long)]
        input: PathBuf,

        /// Print a JSON summary
        #[arg(long)]
        json: bool,
    },
}

/// Initialize the logging system with timestamp, level, and message formatting.
///
/// Format: `[HH:MM:SS] [LEVEL] message`
fn init_logger(level: LevelFilter) {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(level)
        .init();
}

fn load_pixels(path: &Path) -> Result<PixelBuffer> {
    PixelBuffer::open(path).with_context(|| format!("Failed to load image {}", path.display()))
}

fn run_encode(
    config: &StegoConfig,
    input: &Path,
    message: &str,
    output: Option<PathBuf>,
    format: Option<OutputFormat>,
    data_url: bool,
    json: bool,
) -> Result<()> {
    let format = format.unwrap_or(config.output.format);
    let pixel_codec = ImageCodec::new(format)?;
    let output = output.unwrap_or_else(|| config.output.default_path(format));

    let mut pixels = load_pixels(input)?;
    embed_text(&mut pixels, message)?;

    let bytes = pixel_codec.encode_buffer_to_image(&pixels)?;
    fs::write(&output, &bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Encoded image written to {}", output.display());

    if json {
        let summary = EncodeReport {
            output: output.display().to_string(),
            message_bytes: message.len(),
            samples_written: codec::required_samples(message.len()),
            capacity: CapacityReport::for_pixels(&pixels),
        };
        println!("{}", report::to_json(&summary)?);
    } else {
        println!("Encoded image written to: {}", output.display());
    }

    if data_url {
        println!("{}", to_data_url(&bytes, format));
    }

    Ok(())
}

fn run_decode(input: &Path, json: bool) -> Result<bool> {
    let pixels = load_pixels(input)?;
    let extraction = extract_text(&pixels);
    let found = matches!(extraction, Extraction::Found(_));

    if json {
        let summary = match extraction {
            Extraction::Found(text) => DecodeReport {
                found: true,
                message: Some(text),
                reason: None,
            },
            Extraction::NotFound(reason) => DecodeReport {
                found: false,
                message: None,
                reason: Some(reason),
            },
        };
        println!("{}", report::to_json(&summary)?);
    } else {
        match extraction {
            Extraction::Found(text) => println!("Decoded Message: {}", text),
            Extraction::NotFound(_) => println!("Message not found"),
        }
    }

    Ok(found)
}

fn run_capacity(input: &Path, json: bool) -> Result<()> {
    let pixels = load_pixels(input)?;
    let summary = CapacityReport::for_pixels(&pixels);

    if json {
        println!("{}", report::to_json(&summary)?);
    } else {
        println!(
            "{}x{} image, {} samples, room for {} bytes of text",
            summary.width, summary.height, summary.samples, summary.max_message_bytes
        );
    }

    Ok(())
}

fn main() -> Result<ExitCode> {
    // Parse command-line arguments
    let args = Args::parse();

    let config = StegoConfig::load(args.config.as_deref())?;
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        config.logging.level_filter()?
    };
    init_logger(level);

    match args.command {
        Command::Encode {
            input,
            message,
            output,
            format,
            data_url,
            json,
        } => run_encode(&config, &input, &message, output, format, data_url, json)?,
        Command::Decode { input, json } => {
            if !run_decode(&input, json)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Capacity { input, json } => run_capacity(&input, json)?,
    }

    Ok(ExitCode::SUCCESS)
}
