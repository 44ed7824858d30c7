use std::path::{Path, PathBuf};

use crate::foundation::{
    core::Fps,
    error::{FlashcutError, FlashcutResult},
};

/// Stream-level metadata reported by `ffprobe`.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaInfo {
    /// Probed file.
    pub source_path: PathBuf,
    /// Container duration in seconds.
    pub duration_secs: f64,
    /// First video stream, if any.
    pub video: Option<VideoStreamInfo>,
    /// Duration of the first audio stream in seconds, if any.
    pub audio_duration_secs: Option<f64>,
}

/// First video stream of a probed file.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoStreamInfo {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Nominal frame rate.
    pub fps: Option<Fps>,
    /// Frame count when the container records it.
    pub frame_count: Option<u64>,
    /// Stream duration in seconds.
    pub duration_secs: Option<f64>,
}

impl MediaInfo {
    /// Whether at least one audio stream exists.
    pub fn has_audio(&self) -> bool {
        self.audio_duration_secs.is_some()
    }
}

/// Probe container and stream metadata through `ffprobe`.
pub fn probe_media(source_path: &Path) -> FlashcutResult<MediaInfo> {
    let out = std::process::Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_streams",
            "-show_format",
        ])
        .arg(source_path)
        .output()
        .map_err(|e| FlashcutError::encode(format!("failed to run ffprobe: {e}")))?;
    if !out.status.success() {
        return Err(FlashcutError::encode(format!(
            "ffprobe failed for '{}': {}",
            source_path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }
    parse_probe_json(source_path, &out.stdout)
}

/// Total duration in seconds of a decodable media file.
pub fn probe_media_duration(source_path: &Path) -> FlashcutResult<f64> {
    let info = probe_media(source_path)?;
    info.audio_duration_secs
        .filter(|d| *d > 0.0)
        .or(Some(info.duration_secs).filter(|d| *d > 0.0))
        .ok_or_else(|| {
            FlashcutError::encode(format!(
                "ffprobe reported no duration for '{}'",
                source_path.display()
            ))
        })
}

pub(crate) fn parse_probe_json(source_path: &Path, json: &[u8]) -> FlashcutResult<MediaInfo> {
    #[derive(serde::Deserialize)]
    struct ProbeStream {
        codec_type: Option<String>,
        width: Option<u32>,
        height: Option<u32>,
        r_frame_rate: Option<String>,
        nb_frames: Option<String>,
        duration: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeFormat {
        duration: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        #[serde(default)]
        streams: Vec<ProbeStream>,
        format: Option<ProbeFormat>,
    }

    let parsed: ProbeOut = serde_json::from_slice(json)
        .map_err(|e| FlashcutError::encode(format!("ffprobe json parse failed: {e}")))?;

    let parse_secs = |s: Option<&String>| s.and_then(|v| v.parse::<f64>().ok());

    let video = parsed
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .map(|s| -> FlashcutResult<VideoStreamInfo> {
            Ok(VideoStreamInfo {
                width: s
                    .width
                    .ok_or_else(|| FlashcutError::encode("missing video width from ffprobe"))?,
                height: s
                    .height
                    .ok_or_else(|| FlashcutError::encode("missing video height from ffprobe"))?,
                fps: s.r_frame_rate.as_deref().and_then(parse_ff_ratio),
                frame_count: s.nb_frames.as_ref().and_then(|n| n.parse().ok()),
                duration_secs: parse_secs(s.duration.as_ref()),
            })
        })
        .transpose()?;

    let audio_duration_secs = parsed
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("audio"))
        .map(|s| parse_secs(s.duration.as_ref()).unwrap_or(0.0));

    let duration_secs = parsed
        .format
        .as_ref()
        .and_then(|f| parse_secs(f.duration.as_ref()))
        .unwrap_or(0.0);

    Ok(MediaInfo {
        source_path: source_path.to_path_buf(),
        duration_secs,
        video,
        audio_duration_secs,
    })
}

fn parse_ff_ratio(s: &str) -> Option<Fps> {
    let (num, den) = s.split_once('/')?;
    Fps::new(num.trim().parse().ok()?, den.trim().parse().ok()?).ok()
}

#[cfg(test)]
#[path = "../../tests/unit/assets/media.rs"]
mod tests;
