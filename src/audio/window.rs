use crate::{
    config::spec::AudioStart,
    foundation::error::{FlashcutError, FlashcutResult},
};

/// Slack allowed between the window end and the probed asset duration.
pub const WINDOW_TOLERANCE_SECS: f64 = 0.01;

/// Half-open `[start, end)` range of the audio asset laid under the video.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AudioWindow {
    /// Window start in seconds.
    pub start_secs: f64,
    /// Window end (exclusive) in seconds.
    pub end_secs: f64,
}

impl AudioWindow {
    /// Window starting at `start` and lasting `video_length_secs`.
    pub fn new(start: AudioStart, video_length_secs: u64) -> FlashcutResult<Self> {
        if video_length_secs == 0 {
            return Err(FlashcutError::validation(
                "audio window must have a positive length",
            ));
        }
        let start_secs = start.seconds as f64;
        Ok(Self {
            start_secs,
            end_secs: start_secs + video_length_secs as f64,
        })
    }

    /// Window length in seconds.
    pub fn len_secs(&self) -> f64 {
        self.end_secs - self.start_secs
    }

    /// Fail with [`FlashcutError::AudioWindowOutOfRange`] unless an asset of
    /// `available_secs` covers the whole window.
    pub fn ensure_within(&self, available_secs: f64) -> FlashcutResult<()> {
        if available_secs + WINDOW_TOLERANCE_SECS < self.end_secs {
            return Err(FlashcutError::AudioWindowOutOfRange {
                start: self.start_secs,
                end: self.end_secs,
                available: available_secs,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/audio/window.rs"]
mod tests;
