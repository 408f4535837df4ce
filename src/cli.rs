//! CLI front end (C11).
//!
//! The only flag this crate's non-goals leave room for is the uniform
//! integer scale; input/output are not flags (spec.md §6) — the tool always
//! reads `./in/*.png` and writes `./out/<stem>_X<scale>.svg`.

use clap::Parser;

#[derive(Parser)]
#[command(name = "pixvg")]
#[command(about = "Pixel-perfect tracer from pixel-art sprites to SVG")]
#[command(version)]
pub struct Cli {
    /// Uniform integer scale applied to path coordinates, not to the input image
    #[arg(short, long, default_value_t = 1)]
    pub scale: u32,
}
