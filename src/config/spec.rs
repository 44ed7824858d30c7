use std::{fmt, path::Path, str::FromStr};

use crate::foundation::{
    core::Resolution,
    error::{FlashcutError, FlashcutResult},
};

/// Default upper bound on the frame rate; delays are added on top of one frame at this rate.
pub const DEFAULT_MAX_FRAME_RATE: u32 = 30;

/// Target video length class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationClass {
    /// 30 seconds.
    Short,
    /// 60 seconds.
    Long,
}

impl DurationClass {
    /// Target video length in whole seconds.
    pub fn seconds(self) -> u64 {
        match self {
            Self::Short => 30,
            Self::Long => 60,
        }
    }
}

impl FromStr for DurationClass {
    type Err = FlashcutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            _ => Err(FlashcutError::UnsupportedDuration(s.to_string())),
        }
    }
}

impl fmt::Display for DurationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Short => "short",
            Self::Long => "long",
        })
    }
}

/// Output canvas preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
    /// 640x480 (4:3).
    Square,
    /// 1280x720 (16:9).
    Hd,
}

impl FormatType {
    /// Canvas size for this preset.
    pub fn resolution(self) -> Resolution {
        match self {
            Self::Square => Resolution::new(640, 480),
            Self::Hd => Resolution::new(1280, 720),
        }
    }
}

impl FromStr for FormatType {
    type Err = FlashcutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" => Ok(Self::Square),
            "hd" => Ok(Self::Hd),
            _ => Err(FlashcutError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Square => "square",
            Self::Hd => "hd",
        })
    }
}

/// Recognized still-image file extensions.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExtensionFilter {
    /// Extensions without the leading dot.
    pub extensions: Vec<String>,
    /// Compare extensions byte-for-byte instead of ASCII case-insensitively.
    #[serde(default)]
    pub case_sensitive: bool,
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self {
            extensions: vec!["jpg".to_string(), "png".to_string()],
            case_sensitive: false,
        }
    }
}

impl ExtensionFilter {
    /// Build a filter from a list such as `["jpg", ".PNG"]`.
    pub fn new<I, S>(extensions: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.as_ref().trim().trim_start_matches('.').to_string())
                .filter(|e| !e.is_empty())
                .collect(),
            case_sensitive,
        }
    }

    /// Return `true` when `path` carries one of the recognized extensions.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.extensions.iter().any(|want| {
            if self.case_sensitive {
                want == ext
            } else {
                want.eq_ignore_ascii_case(ext)
            }
        })
    }
}

/// Slideshow configuration. Invalid presets are unrepresentable; remaining knobs are
/// checked by [`SlideshowSpec::validate`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SlideshowSpec {
    /// Target video length.
    pub duration: DurationClass,
    /// Milliseconds added on top of the base frame duration.
    pub delay_ms: u64,
    /// Output canvas preset.
    pub format: FormatType,
    /// Shuffle images instead of using sorted order.
    #[serde(default)]
    pub randomize: bool,
    /// Seed for a reproducible shuffle. `None` draws from the thread RNG.
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
    /// Base frame rate before delays are applied.
    #[serde(default = "default_max_frame_rate")]
    pub max_frame_rate: u32,
    /// Which directory entries count as images.
    #[serde(default)]
    pub extensions: ExtensionFilter,
}

fn default_max_frame_rate() -> u32 {
    DEFAULT_MAX_FRAME_RATE
}

impl SlideshowSpec {
    /// Spec with default frame rate, extensions and sorted ordering.
    pub fn new(duration: DurationClass, delay_ms: u64, format: FormatType) -> Self {
        Self {
            duration,
            delay_ms,
            format,
            randomize: false,
            shuffle_seed: None,
            max_frame_rate: DEFAULT_MAX_FRAME_RATE,
            extensions: ExtensionFilter::default(),
        }
    }

    /// Parse the textual duration/format tokens used on the command line.
    pub fn from_tokens(duration: &str, delay_ms: u64, format: &str) -> FlashcutResult<Self> {
        Ok(Self::new(duration.parse()?, delay_ms, format.parse()?))
    }

    /// Enable shuffling, optionally with a fixed seed.
    pub fn with_shuffle(mut self, randomize: bool, seed: Option<u64>) -> Self {
        self.randomize = randomize;
        self.shuffle_seed = seed;
        self
    }

    /// Replace the extension filter.
    pub fn with_extensions(mut self, extensions: ExtensionFilter) -> Self {
        self.extensions = extensions;
        self
    }

    /// Canvas size for the configured preset.
    pub fn resolution(&self) -> Resolution {
        self.format.resolution()
    }

    /// Check the knobs that the type system does not already constrain.
    pub fn validate(&self) -> FlashcutResult<()> {
        if self.max_frame_rate == 0 {
            return Err(FlashcutError::validation("max frame rate must be non-zero"));
        }
        if self.extensions.extensions.is_empty() {
            return Err(FlashcutError::validation(
                "at least one image extension must be recognized",
            ));
        }
        Ok(())
    }
}

/// Offset into the audio asset where the window starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AudioStart {
    /// Whole seconds from the start of the asset.
    pub seconds: u64,
}

impl FromStr for AudioStart {
    type Err = FlashcutError;

    /// Accepts `MM:SS` or a bare number of seconds.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bad =
            || FlashcutError::validation(format!("invalid audio start '{s}' (expected MM:SS)"));

        let seconds = match s.split_once(':') {
            Some((mm, ss)) => {
                let minutes: u64 = mm.parse().map_err(|_| bad())?;
                let secs: u64 = ss.parse().map_err(|_| bad())?;
                if secs >= 60 {
                    return Err(bad());
                }
                minutes
                    .checked_mul(60)
                    .and_then(|m| m.checked_add(secs))
                    .ok_or_else(bad)?
            }
            None => s.parse().map_err(|_| bad())?,
        };
        Ok(Self { seconds })
    }
}

/// A request to lay an external audio track under the slideshow.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AudioRequest {
    /// Where the audio comes from (URL or local path), interpreted by an audio provider.
    pub locator: String,
    /// Where the window starts inside the acquired asset.
    pub start: AudioStart,
}

#[cfg(test)]
#[path = "../../tests/unit/config/spec.rs"]
mod tests;
