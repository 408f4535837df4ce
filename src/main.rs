use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use pixvg::cli::Cli;
use pixvg::image_processor::load_image;
use pixvg::pipeline::process_image;
use pixvg::reporter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    {
        let _ = std::env::set_current_dir(dir);
    }

    if cli.scale < 1 {
        eprintln!(":: Scale is too low ::");
        return Ok(ExitCode::FAILURE);
    }

    fs::create_dir_all("in").context("could not create ./in")?;
    fs::create_dir_all("out").context("could not create ./out")?;

    let entries = fs::read_dir("in").context("could not read ./in")?;

    let mut png_files = Vec::new();
    let mut skipped_files = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".png") {
            png_files.push(name);
        } else if entry.path().is_file() {
            skipped_files.push(name);
        }
    }
    png_files.sort();
    skipped_files.sort();

    if png_files.is_empty() {
        eprintln!("No input files!");
        return Ok(ExitCode::FAILURE);
    }

    reporter::report_discovery(&png_files, &skipped_files);

    let run_started = Instant::now();
    let mut any_processed = false;

    for filename in &png_files {
        reporter::report_file_start(filename);

        let input_path = std::path::Path::new("in").join(filename);
        let image = match load_image(&input_path) {
            Ok(image) => image,
            Err(e) => {
                reporter::report_skip(filename, &e.to_string());
                continue;
            }
        };

        let (document, stats) = match process_image(&image, cli.scale) {
            Ok(result) => result,
            Err(e) => {
                reporter::report_skip(filename, &e.to_string());
                continue;
            }
        };
        reporter::report_stats(&stats);

        let stem = std::path::Path::new(filename)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| filename.clone());
        let output_path = std::path::Path::new("out").join(format!("{stem}_X{}.svg", cli.scale));

        if let Err(e) = fs::write(&output_path, document.render()) {
            reporter::report_skip(filename, &e.to_string());
            continue;
        }

        reporter::report_saved(&output_path);
        any_processed = true;
    }

    reporter::report_total(run_started.elapsed());

    Ok(if any_processed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
