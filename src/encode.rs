//! Encoding sinks.
//!
//! Sinks consume composed frames in playback order and are driven by
//! [`crate::encode_frames`].

/// `ffmpeg`-based MP4 sink and helpers.
pub(crate) mod ffmpeg;
/// Generic frame sink trait and built-in sinks.
pub(crate) mod sink;
/// The per-frame encode loop.
pub(crate) mod slideshow;
