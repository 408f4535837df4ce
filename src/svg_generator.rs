//! Vector emitter (C7).
//!
//! Serializes a [`Document`] — one filled path per cluster — into SVG 1.1
//! bytes. Coordinates are already corner-lattice integers; scaling them by
//! the document's uniform integer scale keeps every emitted coordinate an
//! integer, so no floating-point formatting is ever needed.

use crate::cluster::Cluster;
use crate::loop_extractor::Loop;
use crate::loop_simplifier::simplify;
use crate::point::Point;

/// One `<path>` element: path data plus its fill color.
#[derive(Debug, Clone)]
pub struct SvgPath {
    pub data: String,
    pub fill: String,
}

/// A complete vector document: canvas size, scale, and the ordered paths
/// that make it up.
#[derive(Debug, Clone)]
pub struct Document {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub paths: Vec<SvgPath>,
}

impl Document {
    pub fn new(width: u32, height: u32, scale: u32) -> Self {
        Document {
            width,
            height,
            scale,
            paths: Vec::new(),
        }
    }

    pub fn push_path(&mut self, path: SvgPath) {
        self.paths.push(path);
    }

    /// Renders the document to its final SVG bytes.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            r#"<svg version="1.1" xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" shape-rendering="crispEdges">"#,
            self.width * self.scale,
            self.height * self.scale,
        ));
        out.push('\n');
        for path in &self.paths {
            out.push_str(&format!(
                r#"  <path d="{}" fill="{}"/>"#,
                path.data, path.fill
            ));
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

fn point_token(p: Point, scale: u32) -> String {
    format!("{},{}", p.x * scale as i64, p.y * scale as i64)
}

/// Converts one traced, simplified loop into its `M...L...Z` segment.
fn loop_to_path_data(loop_: &Loop, scale: u32) -> String {
    let points = loop_.points();
    let mut data = String::new();
    if let Some(&first) = points.first() {
        data.push('M');
        data.push_str(&point_token(first, scale));
        for &p in &points[1..] {
            data.push('L');
            data.push_str(&point_token(p, scale));
        }
        data.push('Z');
    }
    data
}

/// Builds one path's data for a cluster from its already-extracted loops:
/// each loop is simplified, then its segment is concatenated onto the path
/// with no separator — the leading `M` of each segment starts a new
/// sub-path, letting the non-zero fill rule render holes from the opposite
/// winding direction produced by the edge graph.
pub fn cluster_to_path(cluster: &Cluster, loops: &[Loop], scale: u32) -> SvgPath {
    let mut data = String::new();
    for loop_ in loops {
        let simplified = simplify(loop_);
        data.push_str(&loop_to_path_data(&simplified, scale));
    }
    SvgPath {
        data,
        fill: cluster.color.to_hex(),
    }
}
