//! yield-calc - CLI shell for the MI Laser measurement calculator.
//!
//! Collects raw text arguments, normalizes decimal separators ("10,5" and
//! "10.5" both work), dispatches to `yield_core`, and prints the report
//! lines to paste into the order-management system.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use yield_core::calculations::{bar, paint, sheet};
use yield_core::numeric::{parse_decimal, parse_optional};
use yield_core::report;
use yield_core::{BarYieldInput, FaceMode, PaintAreaInput, SheetAreaInput};

/// Material-yield calculator for the laser-cutting shop: bar/tube cutting
/// yield, sheet yield by area, and paint surface area with pricing factors.
#[derive(Parser, Debug)]
#[command(name = "yield-calc")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Print the raw result as JSON instead of report lines
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cutting yield of one stock bar/tube
    Bar {
        /// Stock bar length (mm)
        bar_length: String,

        /// Finished piece length (mm)
        piece_length: String,

        /// Saw/kerf loss per cut (mm)
        #[arg(long, default_value = "0")]
        cut_loss: String,
    },

    /// Area-based yield of one stock sheet
    Sheet {
        /// Sheet width (mm)
        sheet_width: String,

        /// Sheet height (mm)
        sheet_height: String,

        /// Piece width (mm)
        piece_width: String,

        /// Piece height (mm)
        piece_height: String,

        /// Estimated nesting loss (%), e.g. 10 for 10%
        #[arg(long, default_value = "0")]
        loss: String,
    },

    /// Paint surface area (m²) of a box-shaped part
    Paint {
        /// Part width (mm)
        width: String,

        /// Part length (mm)
        length: String,

        /// Part height (mm)
        height: String,

        /// Faces to paint: all, two-opposite, or one
        #[arg(long, default_value = "all")]
        faces: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let lines = match &args.command {
        Command::Bar {
            bar_length,
            piece_length,
            cut_loss,
        } => {
            let input = BarYieldInput {
                bar_length_mm: parse_decimal("bar_length", bar_length)?,
                piece_length_mm: parse_decimal("piece_length", piece_length)?,
                cut_loss_mm: parse_optional(cut_loss),
            };
            debug!(?input, "bar yield input");
            let result = bar::calculate(&input).context("bar yield calculation failed")?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }
            report::bar_report(&input, &result)
        }

        Command::Sheet {
            sheet_width,
            sheet_height,
            piece_width,
            piece_height,
            loss,
        } => {
            let input = SheetAreaInput {
                sheet_width_mm: parse_decimal("sheet_width", sheet_width)?,
                sheet_height_mm: parse_decimal("sheet_height", sheet_height)?,
                piece_width_mm: parse_decimal("piece_width", piece_width)?,
                piece_height_mm: parse_decimal("piece_height", piece_height)?,
                nesting_loss_percent: parse_optional(loss),
            };
            debug!(?input, "sheet yield input");
            let result = sheet::calculate(&input).context("sheet yield calculation failed")?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }
            report::sheet_report(&input, &result)
        }

        Command::Paint {
            width,
            length,
            height,
            faces,
        } => {
            let input = PaintAreaInput {
                width_mm: parse_decimal("width", width)?,
                length_mm: parse_decimal("length", length)?,
                height_mm: parse_decimal("height", height)?,
                face_mode: faces.parse::<FaceMode>()?,
            };
            debug!(?input, "paint area input");
            let result = paint::calculate(&input).context("paint area calculation failed")?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }
            report::paint_report(&input, &result)
        }
    };

    for line in lines {
        println!("{line}");
    }

    Ok(())
}
