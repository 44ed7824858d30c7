/// Convenience result type used across flashcut.
pub type FlashcutResult<T> = Result<T, FlashcutError>;

/// Top-level error taxonomy. Every variant names the stage that failed.
#[derive(thiserror::Error, Debug)]
pub enum FlashcutError {
    /// Invalid user-provided arguments or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// The image directory contained no recognized still images.
    #[error("no images found: {0}")]
    NoImagesFound(String),

    /// Unrecognized format token.
    #[error("unsupported format '{0}' (expected 'square' or 'hd')")]
    UnsupportedFormat(String),

    /// Unrecognized duration token.
    #[error("unsupported duration '{0}' (expected 'short' or 'long')")]
    UnsupportedDuration(String),

    /// Every selected image failed to decode, or nothing was selected.
    #[error("empty video: {0}")]
    EmptyVideo(String),

    /// The audio provider could not produce a local asset.
    #[error("audio acquisition error: {0}")]
    AudioAcquisition(String),

    /// The requested audio window runs past the end of the acquired asset.
    #[error(
        "audio window out of range: [{start:.3}s, {end:.3}s) exceeds asset duration {available:.3}s"
    )]
    AudioWindowOutOfRange {
        /// Requested window start in seconds.
        start: f64,
        /// Requested window end (exclusive) in seconds.
        end: f64,
        /// Duration of the acquired asset in seconds.
        available: f64,
    },

    /// Failures while encoding, probing or muxing through `ffmpeg`/`ffprobe`.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlashcutError {
    /// Build a [`FlashcutError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FlashcutError::NoImagesFound`] value.
    pub fn no_images(msg: impl Into<String>) -> Self {
        Self::NoImagesFound(msg.into())
    }

    /// Build a [`FlashcutError::EmptyVideo`] value.
    pub fn empty_video(msg: impl Into<String>) -> Self {
        Self::EmptyVideo(msg.into())
    }

    /// Build a [`FlashcutError::AudioAcquisition`] value.
    pub fn audio_acquisition(msg: impl Into<String>) -> Self {
        Self::AudioAcquisition(msg.into())
    }

    /// Build a [`FlashcutError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
