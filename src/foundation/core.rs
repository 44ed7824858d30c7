use crate::foundation::error::{FlashcutError, FlashcutResult};

/// Absolute 0-based index of a frame written to a sink.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a reduced rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u64,
    /// Denominator (seconds), must be non-zero.
    pub den: u64,
}

impl Fps {
    /// Create a validated rate, reduced to lowest terms.
    pub fn new(num: u64, den: u64) -> FlashcutResult<Self> {
        if num == 0 || den == 0 {
            return Err(FlashcutError::validation(
                "fps numerator and denominator must be non-zero",
            ));
        }
        let g = gcd(num, den);
        Ok(Self {
            num: num / g,
            den: den / g,
        })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        self.den as f64 / self.num as f64
    }

    /// Number of whole frames that fit in `secs` seconds: `floor(secs * num / den)`.
    pub fn whole_frames_in(self, secs: u64) -> u64 {
        let frames = u128::from(secs) * u128::from(self.num) / u128::from(self.den);
        u64::try_from(frames).unwrap_or(u64::MAX)
    }

    /// Render as the `num/den` form accepted by `ffmpeg -r`.
    pub fn to_ffmpeg_rate(self) -> String {
        format!("{}/{}", self.num, self.den)
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Output frame size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Create a resolution from width and height.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Byte length of one packed RGB8 frame at this size.
    pub fn rgb8_len(self) -> usize {
        self.width as usize * self.height as usize * 3
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
