use crate::{
    assets::decode::FrameDecodeSkip,
    encode::sink::{FrameSink, SinkConfig},
    foundation::{
        core::{Fps, FrameIndex, Resolution},
        error::{FlashcutError, FlashcutResult},
    },
    render::canvas::Canvas,
};

/// Outcome of one encoding pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct EncodeStats {
    /// Frames handed to the sink.
    pub frames_written: u64,
    /// Selected images dropped because they could not be decoded.
    pub frames_skipped: u64,
}

/// Drive `frames` into `sink` at `fps`.
///
/// Skipped frames are logged and counted. The sink is finalized exactly once: `end` when at
/// least one frame was written, `abort` otherwise or on any error, in which case nothing is
/// published.
#[tracing::instrument(skip(frames, sink))]
pub fn encode_frames<I>(
    frames: I,
    res: Resolution,
    fps: Fps,
    sink: &mut dyn FrameSink,
) -> FlashcutResult<EncodeStats>
where
    I: IntoIterator<Item = Result<Canvas, FrameDecodeSkip>>,
{
    if let Err(e) = sink.begin(SinkConfig::new(res, fps)) {
        sink.abort();
        return Err(e);
    }

    let mut stats = EncodeStats::default();
    for item in frames {
        match item {
            Ok(canvas) => {
                if let Err(e) = sink.push_frame(FrameIndex(stats.frames_written), &canvas) {
                    sink.abort();
                    return Err(e);
                }
                stats.frames_written += 1;
            }
            Err(skip) => {
                tracing::warn!("{skip}");
                stats.frames_skipped += 1;
            }
        }
    }

    if stats.frames_written == 0 {
        sink.abort();
        return Err(FlashcutError::empty_video(format!(
            "no frames survived decoding ({} skipped)",
            stats.frames_skipped
        )));
    }

    if let Err(e) = sink.end() {
        sink.abort();
        return Err(e);
    }
    tracing::info!(
        written = stats.frames_written,
        skipped = stats.frames_skipped,
        "encoded slideshow"
    );
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/slideshow.rs"]
mod tests;
