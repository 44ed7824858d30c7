use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::{
    assets::media::probe_media_duration,
    audio::{provider::AudioProvider, window::AudioWindow},
    config::spec::AudioRequest,
    encode::ffmpeg::{ensure_parent_dir, is_ffmpeg_on_path, partial_path_beside, persist_partial},
    foundation::error::{FlashcutError, FlashcutResult},
};

/// Prefix added to the silent video's file name for the muxed artifact.
pub const FINAL_PREFIX: &str = "final_";

/// `dir/final_<name>` for a silent video at `dir/<name>`.
pub fn final_output_path(silent: &Path) -> PathBuf {
    let name = silent
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    silent.with_file_name(format!("{FINAL_PREFIX}{name}"))
}

/// Combine the video stream of `silent` with `window` of `audio` into `out_path`.
///
/// The video stream is copied untouched; the audio is trimmed and encoded to AAC. ffmpeg
/// writes to a temporary file that is moved into place only when it exits cleanly.
#[tracing::instrument]
pub fn mux_audio(
    silent: &Path,
    audio: &Path,
    window: &AudioWindow,
    out_path: &Path,
    overwrite: bool,
) -> FlashcutResult<()> {
    if !is_ffmpeg_on_path() {
        return Err(FlashcutError::encode(
            "ffmpeg is required for muxing audio, but was not found on PATH",
        ));
    }
    ensure_parent_dir(out_path)?;
    let partial = partial_path_beside(out_path)?;

    let mut cmd = Command::new("ffmpeg");
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .args(["-y", "-loglevel", "error", "-i"])
        .arg(silent)
        .args([
            "-ss",
            &format!("{:.3}", window.start_secs),
            "-t",
            &format!("{:.3}", window.len_secs()),
            "-i",
        ])
        .arg(audio)
        .args([
            "-map",
            "0:v:0",
            "-map",
            "1:a:0",
            "-c:v",
            "copy",
            "-c:a",
            "aac",
            "-movflags",
            "+faststart",
            "-f",
            "mp4",
        ])
        .arg(&*partial);
    tracing::debug!(?cmd, "muxing audio");

    let out = cmd.output().map_err(|e| {
        FlashcutError::encode(format!(
            "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
        ))
    })?;
    if !out.status.success() {
        return Err(FlashcutError::encode(format!(
            "ffmpeg mux exited with status {}: {}",
            out.status,
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    persist_partial(partial, out_path, overwrite)
}

/// Acquire the requested audio, check that it covers the window, and mux it under `silent`.
///
/// Returns the path of the muxed artifact. `silent` is left in place on every path.
#[tracing::instrument(skip(provider))]
pub fn synchronize_audio(
    provider: &dyn AudioProvider,
    request: &AudioRequest,
    video_length_secs: u64,
    silent: &Path,
    work_dir: &Path,
    overwrite: bool,
) -> FlashcutResult<PathBuf> {
    let window = AudioWindow::new(request.start, video_length_secs)?;
    tracing::info!(locator = %request.locator, "acquiring audio");
    let audio = provider.acquire(&request.locator, work_dir)?;

    let available = probe_media_duration(&audio)?;
    window.ensure_within(available)?;

    let out_path = final_output_path(silent);
    mux_audio(silent, &audio, &window, &out_path, overwrite)?;
    tracing::info!(
        start = window.start_secs,
        end = window.end_secs,
        path = %out_path.display(),
        "muxed audio"
    );
    Ok(out_path)
}

#[cfg(test)]
#[path = "../../tests/unit/audio/mux.rs"]
mod tests;
