//! Reporter (C12).
//!
//! A pure side-effecting collaborator the driver (C8) calls between pipeline
//! stages. It never sees live bitmasks or node grids — only the counts and
//! `Duration`s the driver has already computed — so it cannot mutate
//! pipeline data (§5). Output mirrors the original tool's console report
//! (filename, dimensions, scale, region/cluster counts, per-stage timing,
//! a final "saved as ..." or skip line) using plain `println!`, matching the
//! teacher crate's precedent of reporting progress without a logging crate.

use std::path::Path;
use std::time::Duration;

use crate::pipeline::PipelineStats;

/// Prints the `< FILES >` banner: every discovered file marked `[ok]` if it
/// will be processed (case-sensitive `.png` suffix) or `[skip]` otherwise.
pub fn report_discovery(png_files: &[String], skipped_files: &[String]) {
    println!("< FILES >");
    for file in png_files {
        println!("  > {file} - [ok]");
    }
    for file in skipped_files {
        println!("  > {file} - [skip]");
    }
    println!();
}

/// Prints the filename header before a file's pipeline stages run.
pub fn report_file_start(filename: &str) {
    println!(":: filename: {filename}");
}

/// Prints the per-file summary once its document has been built: size,
/// scale, and the region/cluster counts and elapsed time gathered by C8.
pub fn report_stats(stats: &PipelineStats) {
    println!("  image size: {}x{}", stats.width, stats.height);
    println!("  scale: {}", stats.scale);
    println!("  {} color region(s)", stats.region_count);
    println!("  {} cluster(s)", stats.cluster_count);
    println!("  done: {:.2}s", stats.elapsed.as_secs_f64());
}

/// Prints the final "saved as ..." line once the SVG has been written.
pub fn report_saved(output_path: &Path) {
    println!("  saved as {} [+]", output_path.display());
    println!();
}

/// Prints a per-file skip/error line and continues with the next file,
/// matching the decode-failure and I/O-failure propagation policy of §7.
pub fn report_skip(filename: &str, reason: &str) {
    println!(":: file error: {reason} ::");
    println!("  >> skip {filename}");
    println!();
}

/// Prints the total elapsed time across every processed file.
pub fn report_total(elapsed: Duration) {
    println!("Total: {:.2}s", elapsed.as_secs_f64());
}
