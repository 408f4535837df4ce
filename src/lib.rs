//! pixvg - pixel-exact raster-to-SVG tracer for pixel-art sprites
//!
//! Converts a decoded RGBA sprite into an SVG whose painted regions are
//! pixel-exact: every filled pixel of a given color becomes a unit
//! axis-aligned square, and all squares belonging to one maximally connected
//! monochromatic region merge into a single closed path, holes included as
//! counter-wound sub-paths.
//!
//! ## Pipeline
//!
//! - [`region::partition_by_color`] splits the source image into per-color
//!   regions (C2).
//! - [`cluster::split_into_clusters`] splits each region into 4-connected
//!   clusters (C3).
//! - [`edge_graph::build_edge_graph`] traces each cluster's boundary onto
//!   the corner lattice (C4).
//! - [`loop_extractor::extract_loops`] walks that graph into closed loops
//!   (C5), [`loop_simplifier::simplify`] removes their collinear interior
//!   vertices (C6), and [`svg_generator`] renders the result (C7).
//! - [`pipeline::process_image`] composes all of the above for one decoded
//!   image (C8).
//!
//! ## Example
//!
//! ```rust,no_run
//! use pixvg::image_processor::load_image;
//! use pixvg::pipeline::process_image;
//! use std::path::Path;
//!
//! let image = load_image(Path::new("sprite.png"))?;
//! let (document, _stats) = process_image(&image, 1)?;
//! std::fs::write("sprite.svg", document.render())?;
//! # Ok::<(), pixvg::error::PixvgError>(())
//! ```

pub mod cli;
pub mod cluster;
pub mod color;
pub mod edge_graph;
pub mod error;
pub mod grid;
pub mod image_processor;
pub mod loop_extractor;
pub mod loop_simplifier;
pub mod neighborhood;
pub mod pipeline;
pub mod point;
pub mod region;
pub mod reporter;
pub mod svg_generator;

pub use color::Color;
pub use error::PixvgError;
pub use image_processor::{load_image, ImageData};
pub use pipeline::{process_image, PipelineStats};
pub use point::Point;
pub use svg_generator::Document;
