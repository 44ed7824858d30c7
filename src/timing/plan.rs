use crate::{
    config::spec::{DurationClass, SlideshowSpec},
    foundation::{core::Fps, error::FlashcutResult},
};

/// Derived timing for one slideshow.
///
/// The frame interval is `1/max_frame_rate + delay_ms/1000` seconds. Keeping the rate as an
/// exact rational means `required_image_count` is an integer floor rather than a float one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FrameTimingPlan {
    /// Target video length in seconds.
    pub video_length_secs: u64,
    /// Effective frame rate after the delay is applied. Always strictly positive.
    pub fps: Fps,
    /// How many images are needed to fill `video_length_secs`.
    pub required_image_count: u64,
}

impl FrameTimingPlan {
    /// Compute the plan for a duration class, per-frame delay and base frame rate.
    ///
    /// With `r = max_frame_rate` and `d = delay_ms`, the interval is `(1000 + r*d) / (1000*r)`
    /// seconds and the effective rate its reciprocal.
    pub fn compute(
        duration: DurationClass,
        delay_ms: u64,
        max_frame_rate: u32,
    ) -> FlashcutResult<Self> {
        let r = u64::from(max_frame_rate);
        let fps = Fps::new(
            1000u64.saturating_mul(r),
            1000u64.saturating_add(r.saturating_mul(delay_ms)),
        )?;
        let video_length_secs = duration.seconds();

        Ok(Self {
            video_length_secs,
            fps,
            required_image_count: fps.whole_frames_in(video_length_secs),
        })
    }

    /// Plan for a validated spec.
    pub fn for_spec(spec: &SlideshowSpec) -> FlashcutResult<Self> {
        spec.validate()?;
        Self::compute(spec.duration, spec.delay_ms, spec.max_frame_rate)
    }

    /// Effective frames per second.
    pub fn effective_fps(&self) -> f64 {
        self.fps.as_f64()
    }

    /// Seconds each frame stays on screen.
    pub fn frame_interval_secs(&self) -> f64 {
        self.fps.frame_duration_secs()
    }

    /// Playback length of a video holding `frames` frames at this rate.
    pub fn duration_for_frames(&self, frames: u64) -> f64 {
        frames as f64 * self.frame_interval_secs()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timing/plan.rs"]
mod tests;
