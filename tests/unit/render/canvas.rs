use std::path::PathBuf;

use super::*;

fn solid(w: u32, h: u32, rgb: [u8; 3]) -> ImageAsset {
    ImageAsset {
        path: PathBuf::from("solid.png"),
        pixels: image::RgbImage::from_pixel(w, h, image::Rgb(rgb)),
    }
}

fn inside(layout: &LetterboxLayout, x: u32, y: u32) -> bool {
    x >= layout.x_offset
        && x < layout.x_offset + layout.width
        && y >= layout.y_offset
        && y < layout.y_offset + layout.height
}

#[test]
fn wide_image_is_pillarboxed_vertically() {
    let l = letterbox_layout(1280, 720, Resolution::new(640, 480));
    assert_eq!(
        l,
        LetterboxLayout {
            width: 640,
            height: 360,
            x_offset: 0,
            y_offset: 60,
        }
    );
}

#[test]
fn tall_image_is_centered_horizontally() {
    let l = letterbox_layout(100, 200, Resolution::new(640, 480));
    assert_eq!((l.width, l.height), (240, 480));
    assert_eq!((l.x_offset, l.y_offset), (200, 0));
}

#[test]
fn odd_padding_floors_offsets() {
    // scale = min(640/3, 480/1) = 213.33.. -> 640x213, top padding floor(267/2).
    let l = letterbox_layout(3, 1, Resolution::new(640, 480));
    assert_eq!((l.width, l.height), (640, 213));
    assert_eq!(l.y_offset, 133);
}

#[test]
fn aspect_ratio_holds_within_rounding() {
    let target = Resolution::new(1280, 720);
    for (w, h) in [(4000, 3000), (333, 777), (1, 1), (5000, 7), (7, 5000), (1920, 1080)] {
        let l = letterbox_layout(w, h, target);
        assert!(l.width <= target.width && l.height <= target.height);
        assert!(l.width == target.width || l.height == target.height);
        let err = if l.width == target.width {
            f64::from(l.width) * f64::from(h) / f64::from(w) - f64::from(l.height)
        } else {
            f64::from(l.height) * f64::from(w) / f64::from(h) - f64::from(l.width)
        };
        assert!(err.abs() <= 1.0, "{w}x{h} -> {}x{}", l.width, l.height);
    }
}

#[test]
fn composed_canvas_has_target_size_and_black_border() {
    let target = Resolution::new(64, 48);
    let asset = solid(200, 50, [10, 200, 30]);
    let canvas = compose_letterboxed(&asset, target);
    let layout = letterbox_layout(200, 50, target);

    assert_eq!((canvas.width, canvas.height), (64, 48));
    assert_eq!(canvas.data.len(), 64 * 48 * 3);
    for y in 0..48 {
        for x in 0..64 {
            let px = canvas.pixel(x, y);
            if inside(&layout, x, y) {
                assert_eq!(px, [10, 200, 30], "inside ({x},{y})");
            } else {
                assert_eq!(px, [0, 0, 0], "border ({x},{y})");
            }
        }
    }
}

#[test]
fn upscale_fills_region_with_source_color() {
    let target = Resolution::new(64, 48);
    let canvas = compose_letterboxed(&solid(4, 4, [255, 255, 255]), target);
    let layout = letterbox_layout(4, 4, target);
    assert_eq!((layout.width, layout.height), (48, 48));
    assert!(canvas.pixel(32, 24).iter().all(|&c| c > 250));
    assert_eq!(canvas.pixel(0, 0), [0, 0, 0]);
    assert_eq!(canvas.pixel(63, 47), [0, 0, 0]);
}

#[test]
fn area_downscale_averages_covered_pixels() {
    let mut src = image::RgbImage::new(4, 2);
    for (x, _, px) in src.enumerate_pixels_mut() {
        *px = if x < 2 {
            image::Rgb([0, 0, 0])
        } else {
            image::Rgb([200, 100, 50])
        };
    }
    let out = area_downscale(&src, 2, 1);
    assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0]);
    assert_eq!(out.get_pixel(1, 0).0, [200, 100, 50]);

    let src = image::RgbImage::from_raw(2, 1, vec![0, 0, 0, 255, 255, 255]).unwrap();
    assert_eq!(area_downscale(&src, 1, 1).get_pixel(0, 0).0, [128, 128, 128]);
}

#[test]
fn area_weights_sum_to_one() {
    for (src, dst) in [(10u32, 3u32), (1280, 640), (7, 7), (1000, 1)] {
        for taps in area_weights(src, dst) {
            let sum: f32 = taps.iter().map(|&(_, w)| w).sum();
            assert!((sum - 1.0).abs() < 1e-4);
        }
    }
}

#[test]
fn compose_file_reports_undecodable_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.jpg");
    std::fs::write(&path, b"garbage").unwrap();
    let skip = compose_file(&path, Resolution::new(640, 480)).unwrap_err();
    assert_eq!(skip.path, path);
}
