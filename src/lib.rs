//! Flashcut turns a directory of still images into a timed MP4 slideshow.
//!
//! A run goes through a fixed set of stages:
//!
//! - Derive a [`FrameTimingPlan`] from a [`SlideshowSpec`]
//! - Select and order the source images
//! - Letterbox each image onto a black canvas and stream it into a [`FrameSink`]
//! - Optionally trim an audio track to the video window and mux it in
//!
//! [`Slideshow`] wires these together; each stage is also usable on its own.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub(crate) mod assets;
pub(crate) mod audio;
pub(crate) mod config;
pub(crate) mod encode;
pub(crate) mod foundation;
pub(crate) mod pipeline;
pub(crate) mod render;
pub(crate) mod timing;

pub use crate::foundation::core::{FrameIndex, Fps, Resolution};
pub use crate::foundation::error::{FlashcutError, FlashcutResult};

pub use crate::assets::decode::{FrameDecodeSkip, ImageAsset, decode_image, decode_image_file};
pub use crate::assets::media::{MediaInfo, VideoStreamInfo, probe_media, probe_media_duration};
pub use crate::assets::select::{ImageSelection, list_image_candidates, select_images};
pub use crate::audio::mux::{FINAL_PREFIX, final_output_path, mux_audio, synchronize_audio};
pub use crate::audio::provider::{
    AudioProvider, AutoProvider, LocalFileProvider, YtDlpProvider, download_stem, sanitize_title,
};
pub use crate::audio::window::{AudioWindow, WINDOW_TOLERANCE_SECS};
pub use crate::config::spec::{
    AudioRequest, AudioStart, DEFAULT_MAX_FRAME_RATE, DurationClass, ExtensionFilter, FormatType,
    SlideshowSpec,
};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path, is_ffprobe_on_path};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::encode::slideshow::{EncodeStats, encode_frames};
pub use crate::pipeline::{RunReport, Slideshow, SlideshowJob};
pub use crate::render::canvas::{
    Canvas, LetterboxLayout, compose_file, compose_letterboxed, letterbox_layout,
};
pub use crate::render::frames::CompositedFrames;
pub use crate::timing::plan::FrameTimingPlan;
