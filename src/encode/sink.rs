use crate::foundation::core::{Fps, FrameIndex, Resolution};
use crate::foundation::error::FlashcutResult;
use crate::render::canvas::Canvas;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
}

impl SinkConfig {
    /// Config for frames of `res` at `fps`.
    pub fn new(res: Resolution, fps: Fps) -> Self {
        Self {
            width: res.width,
            height: res.height,
            fps,
        }
    }
}

/// Sink contract for consuming composed frames in playback order.
///
/// Lifecycle: `begin` once, `push_frame` with strictly increasing indices, then exactly one of
/// `end` (publish the output) or `abort` (discard it).
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> FlashcutResult<()>;
    /// Push one frame in strictly increasing order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &Canvas) -> FlashcutResult<()>;
    /// Finalize the output.
    fn end(&mut self) -> FlashcutResult<()>;
    /// Discard everything written so far. Must be safe to call after a failed `begin`.
    fn abort(&mut self);
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, Canvas)>,
    ended: bool,
    aborted: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, Canvas)] {
        &self.frames
    }

    /// Whether `end` completed.
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Whether `abort` was called.
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> FlashcutResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        self.aborted = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Canvas) -> FlashcutResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> FlashcutResult<()> {
        self.ended = true;
        Ok(())
    }

    fn abort(&mut self) {
        self.frames.clear();
        self.aborted = true;
    }
}
