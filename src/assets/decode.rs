use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

/// A decoded still image, flattened to RGB8.
#[derive(Clone, Debug)]
pub struct ImageAsset {
    /// Where the image was read from.
    pub path: PathBuf,
    /// Decoded pixels. Alpha, if any, is dropped.
    pub pixels: image::RgbImage,
}

impl ImageAsset {
    /// Intrinsic width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Intrinsic height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// A selected image that could not be turned into a frame. Non-fatal: the frame is dropped.
#[derive(thiserror::Error, Debug, Clone)]
#[error("skipping frame '{}': {reason}", .path.display())]
pub struct FrameDecodeSkip {
    /// Source image path.
    pub path: PathBuf,
    /// Decoder message.
    pub reason: String,
}

impl FrameDecodeSkip {
    fn new(path: &Path, reason: impl ToString) -> Self {
        Self {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

/// Read and decode an image file. The format is sniffed from content, not the extension.
pub fn decode_image_file(path: &Path) -> Result<ImageAsset, FrameDecodeSkip> {
    let bytes = std::fs::read(path).map_err(|e| FrameDecodeSkip::new(path, e))?;
    decode_image(path, &bytes)
}

/// Decode encoded image bytes attributed to `path`.
pub fn decode_image(path: &Path, bytes: &[u8]) -> Result<ImageAsset, FrameDecodeSkip> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| FrameDecodeSkip::new(path, e))?;
    let dyn_img = reader.decode().map_err(|e| FrameDecodeSkip::new(path, e))?;
    if dyn_img.width() == 0 || dyn_img.height() == 0 {
        return Err(FrameDecodeSkip::new(path, "image has zero area"));
    }

    Ok(ImageAsset {
        path: path.to_path_buf(),
        pixels: dyn_img.to_rgb8(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
