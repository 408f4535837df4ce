//! Pipeline driver (C8).
//!
//! Composes region partitioning (C2), cluster labeling (C3), edge-graph
//! construction (C4), loop extraction (C5) and simplification (C6) into one
//! vector document (C7) for a single decoded image.

use std::time::{Duration, Instant};

use crate::cluster::split_into_clusters;
use crate::edge_graph::build_edge_graph;
use crate::error::PixvgError;
use crate::image_processor::ImageData;
use crate::loop_extractor::extract_loops;
use crate::region::partition_by_color;
use crate::svg_generator::{cluster_to_path, Document};

/// Per-stage counts and elapsed time for one processed image, handed to the
/// reporting collaborator after the document is built.
#[derive(Debug, Clone)]
pub struct PipelineStats {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub region_count: usize,
    pub cluster_count: usize,
    pub elapsed: Duration,
}

/// Runs the full trace for one decoded image at the given integer scale,
/// returning the rendered document alongside stage statistics.
///
/// Opaque-only: color regions with alpha < 255 are skipped, matching the
/// driver's contract of tracing only fully-opaque sprite pixels.
pub fn process_image(image: &ImageData, scale: u32) -> Result<(Document, PipelineStats), PixvgError> {
    if scale < 1 {
        return Err(PixvgError::InvalidScale(scale));
    }

    let started = Instant::now();
    let mut document = Document::new(image.width, image.height, scale);

    let regions = partition_by_color(image)?;
    let opaque_regions: Vec<_> = regions.into_iter().filter(|r| r.color.a == 255).collect();

    let mut cluster_count = 0;
    for region in &opaque_regions {
        let clusters = split_into_clusters(region)?;
        for cluster in &clusters {
            let graph = build_edge_graph(cluster.bitmask())?;
            let loops = extract_loops(&graph)?;
            let path = cluster_to_path(cluster, &loops, scale);
            document.push_path(path);
            cluster_count += 1;
        }
    }

    let stats = PipelineStats {
        width: image.width,
        height: image.height,
        scale,
        region_count: opaque_regions.len(),
        cluster_count,
        elapsed: started.elapsed(),
    };

    Ok((document, stats))
}
