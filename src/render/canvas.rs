use std::path::Path;

use image::imageops::FilterType;

use crate::{
    assets::decode::{FrameDecodeSkip, ImageAsset, decode_image_file},
    foundation::core::Resolution,
};

/// One output frame: packed RGB8, row-major, black where no image pixels were placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// RGB8 bytes, tightly packed.
    pub data: Vec<u8>,
}

impl Canvas {
    /// All-black canvas.
    pub fn black(res: Resolution) -> Self {
        Self {
            width: res.width,
            height: res.height,
            data: vec![0u8; res.rgb8_len()],
        }
    }

    /// RGB triple at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = (y as usize * self.width as usize + x as usize) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    fn blit(&mut self, src: &image::RgbImage, x_off: u32, y_off: u32) {
        let row_bytes = src.width() as usize * 3;
        let stride = self.width as usize * 3;
        for (row, src_row) in src.as_raw().chunks_exact(row_bytes).enumerate() {
            let start = (y_off as usize + row) * stride + x_off as usize * 3;
            self.data[start..start + row_bytes].copy_from_slice(src_row);
        }
    }
}

/// Where a scaled image lands on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LetterboxLayout {
    /// Scaled image width.
    pub width: u32,
    /// Scaled image height.
    pub height: u32,
    /// Left padding.
    pub x_offset: u32,
    /// Top padding.
    pub y_offset: u32,
}

/// Fit `src_w x src_h` inside `target` with a uniform scale, centered.
///
/// Scaled sizes are rounded and clamped to `[1, target]`; offsets use floor division.
pub fn letterbox_layout(src_w: u32, src_h: u32, target: Resolution) -> LetterboxLayout {
    let scale = f64::min(
        f64::from(target.width) / f64::from(src_w.max(1)),
        f64::from(target.height) / f64::from(src_h.max(1)),
    );
    let fit = |len: u32, bound: u32| ((f64::from(len) * scale).round() as u32).clamp(1, bound);
    let width = fit(src_w, target.width);
    let height = fit(src_h, target.height);

    LetterboxLayout {
        width,
        height,
        x_offset: (target.width - width) / 2,
        y_offset: (target.height - height) / 2,
    }
}

/// Scale `asset` to fit `target` and center it on a black canvas.
pub fn compose_letterboxed(asset: &ImageAsset, target: Resolution) -> Canvas {
    let layout = letterbox_layout(asset.width(), asset.height(), target);
    let scaled = resample(&asset.pixels, layout.width, layout.height);

    let mut canvas = Canvas::black(target);
    canvas.blit(&scaled, layout.x_offset, layout.y_offset);
    canvas
}

/// Decode `path` and compose it. Decode failures are returned as skips.
pub fn compose_file(path: &Path, target: Resolution) -> Result<Canvas, FrameDecodeSkip> {
    let asset = decode_image_file(path)?;
    Ok(compose_letterboxed(&asset, target))
}

fn resample(src: &image::RgbImage, width: u32, height: u32) -> image::RgbImage {
    if (width, height) == src.dimensions() {
        return src.clone();
    }
    if width <= src.width() && height <= src.height() {
        return area_downscale(src, width, height);
    }
    image::imageops::resize(src, width, height, FilterType::Triangle)
}

/// Source spans covering one destination sample along an axis, as `(index, weight)` pairs
/// whose weights sum to 1.
fn area_weights(src_len: u32, dst_len: u32) -> Vec<Vec<(usize, f32)>> {
    let ratio = f64::from(src_len) / f64::from(dst_len);
    (0..dst_len)
        .map(|i| {
            let start = f64::from(i) * ratio;
            let end = (f64::from(i) + 1.0) * ratio;
            let first = start.floor() as usize;
            let last = (end.ceil() as usize).min(src_len as usize);
            (first..last)
                .filter_map(|j| {
                    let cover = end.min(j as f64 + 1.0) - start.max(j as f64);
                    (cover > 1e-9).then_some((j, (cover / ratio) as f32))
                })
                .collect()
        })
        .collect()
}

/// Box-filter downscale where each output pixel is the coverage-weighted mean of the source
/// pixels under it.
fn area_downscale(src: &image::RgbImage, width: u32, height: u32) -> image::RgbImage {
    let (src_w, src_h) = src.dimensions();
    let xw = area_weights(src_w, width);
    let yw = area_weights(src_h, height);
    let raw = src.as_raw();

    // Horizontal pass: src_h rows of `width` pixels.
    let mut horiz = vec![0f32; src_h as usize * width as usize * 3];
    for y in 0..src_h as usize {
        let row = &raw[y * src_w as usize * 3..(y + 1) * src_w as usize * 3];
        for (x, taps) in xw.iter().enumerate() {
            let mut acc = [0f32; 3];
            for &(sx, w) in taps {
                for (a, &v) in acc.iter_mut().zip(&row[sx * 3..sx * 3 + 3]) {
                    *a += f32::from(v) * w;
                }
            }
            let o = (y * width as usize + x) * 3;
            horiz[o..o + 3].copy_from_slice(&acc);
        }
    }

    let mut out = image::RgbImage::new(width, height);
    for (y, taps) in yw.iter().enumerate() {
        for x in 0..width as usize {
            let mut acc = [0f32; 3];
            for &(sy, w) in taps {
                let o = (sy * width as usize + x) * 3;
                for (a, &v) in acc.iter_mut().zip(&horiz[o..o + 3]) {
                    *a += v * w;
                }
            }
            out.put_pixel(
                x as u32,
                y as u32,
                image::Rgb(acc.map(|v| v.round().clamp(0.0, 255.0) as u8)),
            );
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
