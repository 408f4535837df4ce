// Integration tests for pixvg: exercise load_image + process_image end to
// end on synthetic PNGs built the way the teacher crate's integration tests
// build them (via `image::ImageBuffer`, round-tripped through a temp file).

use pixvg::image_processor::load_image;
use pixvg::pipeline::process_image;
use rgb::RGBA8;
use std::fs;
use std::path::PathBuf;

fn create_test_png(path: &PathBuf, width: u32, height: u32, pixels: &[RGBA8]) {
    let mut raw: Vec<u8> = Vec::with_capacity(pixels.len() * 4);
    for p in pixels {
        raw.extend_from_slice(&[p.r, p.g, p.b, p.a]);
    }
    let img: image::RgbaImage = image::ImageBuffer::from_raw(width, height, raw).unwrap();
    img.save(path).expect("failed to save test image");
}

#[test]
fn single_opaque_pixel_traces_to_unit_square() {
    let path = PathBuf::from("/tmp/pixvg_single_pixel.png");
    create_test_png(&path, 1, 1, &[RGBA8::new(10, 20, 30, 255)]);

    let image = load_image(&path).expect("failed to load image");
    let (document, stats) = process_image(&image, 1).expect("failed to process image");

    assert_eq!(stats.region_count, 1);
    assert_eq!(stats.cluster_count, 1);
    assert_eq!(document.paths.len(), 1);
    assert_eq!(document.paths[0].data, "M0,0L1,0L1,1L0,1Z");
    assert_eq!(document.paths[0].fill, "#0a141eff");

    let _ = fs::remove_file(&path);
}

#[test]
fn diagonally_touching_pixels_become_two_clusters() {
    let path = PathBuf::from("/tmp/pixvg_diagonal_touch.png");
    let on = RGBA8::new(255, 0, 0, 255);
    let off = RGBA8::new(0, 0, 0, 0);
    create_test_png(&path, 2, 2, &[on, off, off, on]);

    let image = load_image(&path).expect("failed to load image");
    let (document, stats) = process_image(&image, 1).expect("failed to process image");

    assert_eq!(stats.region_count, 1);
    assert_eq!(stats.cluster_count, 2);
    assert_eq!(document.paths.len(), 2);
    for path in &document.paths {
        assert_eq!(path.data.matches('Z').count(), 1);
    }

    let _ = fs::remove_file(&path);
}

#[test]
fn ring_with_hole_emits_outer_and_inner_subpath() {
    let path = PathBuf::from("/tmp/pixvg_ring.png");
    let on = RGBA8::new(0, 128, 255, 255);
    let off = RGBA8::new(0, 0, 0, 0);
    #[rustfmt::skip]
    let pixels = [
        on, on, on,
        on, off, on,
        on, on, on,
    ];
    create_test_png(&path, 3, 3, &pixels);

    let image = load_image(&path).expect("failed to load image");
    let (document, stats) = process_image(&image, 1).expect("failed to process image");

    assert_eq!(stats.cluster_count, 1);
    assert_eq!(document.paths.len(), 1);
    assert_eq!(
        document.paths[0].data,
        "M0,0L3,0L3,3L0,3ZM1,1L1,2L2,2L2,1Z"
    );

    let _ = fs::remove_file(&path);
}

#[test]
fn scale_multiplies_every_emitted_coordinate() {
    let path = PathBuf::from("/tmp/pixvg_scale.png");
    create_test_png(&path, 2, 2, &vec![RGBA8::new(0, 0, 0, 255); 4]);

    let image = load_image(&path).expect("failed to load image");
    let (document, _) = process_image(&image, 5).expect("failed to process image");

    assert_eq!(document.paths[0].data, "M0,0L10,0L10,10L0,10Z");

    let _ = fs::remove_file(&path);
}

#[test]
fn partially_transparent_pixels_are_excluded() {
    let path = PathBuf::from("/tmp/pixvg_alpha.png");
    let opaque = RGBA8::new(255, 255, 255, 255);
    let translucent = RGBA8::new(255, 0, 0, 128);
    create_test_png(&path, 2, 1, &[opaque, translucent]);

    let image = load_image(&path).expect("failed to load image");
    let (document, stats) = process_image(&image, 1).expect("failed to process image");

    assert_eq!(stats.region_count, 1);
    assert_eq!(document.paths.len(), 1);
    assert_eq!(document.paths[0].fill, "#ffffffff");

    let _ = fs::remove_file(&path);
}

#[test]
fn invalid_scale_is_rejected_before_any_tracing() {
    let path = PathBuf::from("/tmp/pixvg_invalid_scale.png");
    create_test_png(&path, 1, 1, &[RGBA8::new(0, 0, 0, 255)]);

    let image = load_image(&path).expect("failed to load image");
    assert!(process_image(&image, 0).is_err());

    let _ = fs::remove_file(&path);
}

#[test]
fn l_shaped_cluster_simplifies_to_its_six_turning_points() {
    // Three opaque pixels forming an L, with the fourth corner transparent:
    //
    //   # .
    //   # #
    //
    // Traced per-pixel this has 8 collinear-laden boundary points; simplified
    // it must collapse to exactly the 6 corners where the boundary turns.
    let path = PathBuf::from("/tmp/pixvg_l_shape.png");
    let on = RGBA8::new(0, 0, 0, 255);
    let off = RGBA8::new(0, 0, 0, 0);
    create_test_png(&path, 2, 2, &[on, on, on, off]);

    let image = load_image(&path).expect("failed to load image");
    let (document, stats) = process_image(&image, 1).expect("failed to process image");

    assert_eq!(stats.cluster_count, 1);
    assert_eq!(document.paths.len(), 1);
    assert_eq!(document.paths[0].data, "M0,0L2,0L2,1L1,1L1,2L0,2Z");

    let _ = fs::remove_file(&path);
}

#[test]
fn rendered_document_is_well_formed_svg() {
    let path = PathBuf::from("/tmp/pixvg_render.png");
    create_test_png(&path, 3, 3, &vec![RGBA8::new(1, 2, 3, 255); 9]);

    let image = load_image(&path).expect("failed to load image");
    let (document, _) = process_image(&image, 2).expect("failed to process image");
    let rendered = document.render();

    assert!(rendered.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
    assert!(rendered.contains(r#"width="6" height="6""#));
    assert!(rendered.contains(r#"shape-rendering="crispEdges""#));
    assert!(rendered.contains("<path d=\"M0,0L6,0L6,6L0,6Z\" fill=\"#010203ff\"/>"));

    let _ = fs::remove_file(&path);
}
