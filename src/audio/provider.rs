use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::foundation::error::{FlashcutError, FlashcutResult};

/// Turns an audio locator into a local, decodable audio file.
///
/// Failures are reported as [`FlashcutError::AudioAcquisition`]. Providers do not retry.
pub trait AudioProvider {
    /// Produce a local audio file for `locator`, writing any downloads under `work_dir`.
    fn acquire(&self, locator: &str, work_dir: &Path) -> FlashcutResult<PathBuf>;
}

/// Locator is a path to an audio file that already exists locally.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalFileProvider;

impl AudioProvider for LocalFileProvider {
    fn acquire(&self, locator: &str, _work_dir: &Path) -> FlashcutResult<PathBuf> {
        let path = PathBuf::from(locator);
        if !path.is_file() {
            return Err(FlashcutError::audio_acquisition(format!(
                "'{}' is not a readable local file",
                path.display()
            )));
        }
        Ok(path)
    }
}

/// Downloads audio through the system `yt-dlp`, extracted to mp3.
#[derive(Clone, Debug)]
pub struct YtDlpProvider {
    /// Executable to invoke.
    pub program: String,
    /// File name prefix for downloads.
    pub output_name: String,
}

impl Default for YtDlpProvider {
    fn default() -> Self {
        Self {
            program: "yt-dlp".to_string(),
            output_name: "downloaded_audio".to_string(),
        }
    }
}

impl YtDlpProvider {
    fn run(&self, args: &[&str], locator: &str) -> FlashcutResult<Vec<u8>> {
        let mut cmd = Command::new(&self.program);
        cmd.args(["--no-playlist", "--quiet", "--no-warnings"])
            .args(args)
            .arg("--")
            .arg(locator)
            .stdin(Stdio::null());
        tracing::debug!(?cmd, "running yt-dlp");

        let out = cmd.output().map_err(|e| {
            FlashcutError::audio_acquisition(format!(
                "failed to run {} (is it installed and on PATH?): {e}",
                self.program
            ))
        })?;
        if !out.status.success() {
            return Err(FlashcutError::audio_acquisition(format!(
                "{} failed for '{locator}': {}",
                self.program,
                String::from_utf8_lossy(&out.stderr).trim()
            )));
        }
        Ok(out.stdout)
    }
}

impl AudioProvider for YtDlpProvider {
    #[tracing::instrument(skip(self))]
    fn acquire(&self, locator: &str, work_dir: &Path) -> FlashcutResult<PathBuf> {
        let title = self.run(&["--skip-download", "--print", "title"], locator)?;
        let title = String::from_utf8_lossy(&title);
        let first_line = title.lines().next().unwrap_or("");
        let stem = download_stem(&self.output_name, first_line);

        let template = work_dir
            .join(format!("{stem}.%(ext)s"))
            .to_string_lossy()
            .into_owned();
        self.run(
            &[
                "-f",
                "bestaudio/best",
                "--extract-audio",
                "--audio-format",
                "mp3",
                "--audio-quality",
                "192K",
                "-o",
                template.as_str(),
            ],
            locator,
        )?;

        let path = work_dir.join(format!("{stem}.mp3"));
        if !path.is_file() {
            return Err(FlashcutError::audio_acquisition(format!(
                "{} reported success but '{}' was not produced",
                self.program,
                path.display()
            )));
        }
        tracing::info!(path = %path.display(), "downloaded audio");
        Ok(path)
    }
}

/// Local files when the locator names one, otherwise `yt-dlp`.
#[derive(Clone, Debug, Default)]
pub struct AutoProvider {
    /// Provider used for anything that is not a local file.
    pub remote: YtDlpProvider,
}

impl AudioProvider for AutoProvider {
    fn acquire(&self, locator: &str, work_dir: &Path) -> FlashcutResult<PathBuf> {
        if Path::new(locator).is_file() {
            LocalFileProvider.acquire(locator, work_dir)
        } else {
            self.remote.acquire(locator, work_dir)
        }
    }
}

const MAX_FILE_NAME_BYTES: usize = 255;
const AUDIO_SUFFIX: &str = ".mp3";

/// File stem for a download: `<prefix>_<sanitized title>`, or just `<prefix>` when the title is
/// empty. The full name including `.mp3` never exceeds 255 bytes.
pub fn download_stem(prefix: &str, title: &str) -> String {
    let safe = sanitize_title(title);
    if safe.is_empty() {
        return prefix.to_string();
    }

    let budget = MAX_FILE_NAME_BYTES.saturating_sub(prefix.len() + 1 + AUDIO_SUFFIX.len());
    let mut cut = String::with_capacity(budget);
    for ch in safe.chars() {
        if cut.len() + ch.len_utf8() > budget {
            break;
        }
        cut.push(ch);
    }
    if cut.is_empty() {
        return prefix.to_string();
    }
    format!("{prefix}_{cut}")
}

/// Spaces become `_`; alphanumerics and `_-.` are kept; anything else becomes `_`.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '_' | '-' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/audio/provider.rs"]
mod tests;
