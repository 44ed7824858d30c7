use std::path::{Path, PathBuf};

use crate::{
    assets::select::{ImageSelection, list_image_candidates, select_images},
    audio::{mux::synchronize_audio, provider::AudioProvider},
    config::spec::{AudioRequest, SlideshowSpec},
    encode::{
        ffmpeg::{FfmpegSink, FfmpegSinkOpts},
        sink::FrameSink,
        slideshow::{EncodeStats, encode_frames},
    },
    foundation::error::FlashcutResult,
    render::frames::CompositedFrames,
    timing::plan::FrameTimingPlan,
};

/// Inputs and outputs for one end-to-end run.
#[derive(Clone, Debug)]
pub struct SlideshowJob {
    /// Directory holding the source images.
    pub image_dir: PathBuf,
    /// Where the silent slideshow is written.
    pub output: PathBuf,
    /// Optional audio to mux into `final_<output>`.
    pub audio: Option<AudioRequest>,
    /// Replace existing output files.
    pub overwrite: bool,
}

impl SlideshowJob {
    /// Job without audio that overwrites existing output.
    pub fn new(image_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            image_dir: image_dir.into(),
            output: output.into(),
            audio: None,
            overwrite: true,
        }
    }

    /// Attach an audio request.
    pub fn with_audio(mut self, audio: AudioRequest) -> Self {
        self.audio = Some(audio);
        self
    }
}

/// What a completed run produced.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Timing used for the video.
    pub plan: FrameTimingPlan,
    /// Number of qualifying images found.
    pub available_images: usize,
    /// Number of images handed to the encoder.
    pub selected_images: usize,
    /// Frames written and skipped.
    pub stats: EncodeStats,
    /// The silent slideshow.
    pub silent_path: PathBuf,
    /// The muxed artifact, when audio was requested.
    pub muxed_path: Option<PathBuf>,
}

/// A validated slideshow configuration with its timing plan.
#[derive(Clone, Debug)]
pub struct Slideshow {
    spec: SlideshowSpec,
    plan: FrameTimingPlan,
}

impl Slideshow {
    /// Validate `spec` and compute its timing plan.
    pub fn new(spec: SlideshowSpec) -> FlashcutResult<Self> {
        let plan = FrameTimingPlan::for_spec(&spec)?;
        tracing::info!(
            fps = plan.effective_fps(),
            required = plan.required_image_count,
            "computed timing"
        );
        Ok(Self { spec, plan })
    }

    /// The derived timing plan.
    pub fn plan(&self) -> &FrameTimingPlan {
        &self.plan
    }

    /// List, order and truncate the images in `image_dir`.
    #[tracing::instrument(skip(self))]
    pub fn select(&self, image_dir: &Path) -> FlashcutResult<ImageSelection> {
        let candidates = list_image_candidates(image_dir, &self.spec.extensions)?;
        tracing::info!("loaded {} image files", candidates.len());

        let selection = select_images(
            candidates,
            self.spec.randomize,
            self.spec.shuffle_seed,
            self.plan.required_image_count,
        )?;
        if selection.shortfall() > 0 {
            tracing::warn!(
                available = selection.available,
                required = selection.required,
                "not enough images to fill the target duration; video will run {:.2}s",
                self.plan.duration_for_frames(selection.images.len() as u64)
            );
        } else if selection.available > selection.images.len() {
            tracing::info!(
                "using {} of {} images to match the video length",
                selection.images.len(),
                selection.available
            );
        }
        Ok(selection)
    }

    /// Compose and encode `selection` into `sink`.
    pub fn render_selection(
        &self,
        selection: &ImageSelection,
        sink: &mut dyn FrameSink,
    ) -> FlashcutResult<EncodeStats> {
        let res = self.spec.resolution();
        let frames = CompositedFrames::new(selection.images.clone(), res);
        encode_frames(frames, res, self.plan.fps, sink)
    }

    /// Select images from `image_dir` and encode them into `sink`.
    pub fn render_silent(
        &self,
        image_dir: &Path,
        sink: &mut dyn FrameSink,
    ) -> FlashcutResult<(ImageSelection, EncodeStats)> {
        let selection = self.select(image_dir)?;
        let stats = self.render_selection(&selection, sink)?;
        Ok((selection, stats))
    }

    /// Run the whole pipeline: silent MP4, then the optional audio mux.
    ///
    /// An audio-stage failure is returned as an error but the silent video stays on disk.
    #[tracing::instrument(skip(self, provider))]
    pub fn run(
        &self,
        job: &SlideshowJob,
        provider: &dyn AudioProvider,
    ) -> FlashcutResult<RunReport> {
        let mut sink = FfmpegSink::new(FfmpegSinkOpts {
            out_path: job.output.clone(),
            overwrite: job.overwrite,
        });
        let (selection, stats) = self.render_silent(&job.image_dir, &mut sink)?;
        tracing::info!(path = %job.output.display(), "wrote silent slideshow");

        let muxed_path = match &job.audio {
            Some(request) => {
                let work_dir = match job.output.parent() {
                    Some(p) if !p.as_os_str().is_empty() => p,
                    _ => Path::new("."),
                };
                let muxed = synchronize_audio(
                    provider,
                    request,
                    self.plan.video_length_secs,
                    &job.output,
                    work_dir,
                    job.overwrite,
                )
                .inspect_err(|e| {
                    tracing::error!(
                        silent = %job.output.display(),
                        "audio stage failed, silent video kept: {e}"
                    );
                })?;
                Some(muxed)
            }
            None => None,
        };

        Ok(RunReport {
            plan: self.plan,
            available_images: selection.available,
            selected_images: selection.images.len(),
            stats,
            silent_path: job.output.clone(),
            muxed_path,
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
