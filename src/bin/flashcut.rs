use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing::Level;

const RANDOMIZE_TOKEN: &str = "randomize";

#[derive(Parser, Debug)]
#[command(
    name = "flashcut",
    version,
    about = "Build a timed MP4 slideshow from a directory of images"
)]
struct Cli {
    /// Directory containing the source images.
    image_dir: PathBuf,

    /// Output MP4 path for the silent slideshow.
    output: PathBuf,

    /// Video length class: `short` (30 s) or `long` (60 s).
    duration: String,

    /// Milliseconds added to each frame's on-screen time.
    delay_ms: u64,

    /// Canvas preset: `square` (640x480) or `hd` (1280x720).
    format: String,

    /// Trailing slots: shuffle slot (`randomize` enables shuffling), audio locator, audio start
    /// as `MM:SS`.
    #[arg(num_args = 0..=3)]
    extra: Vec<String>,

    /// Seed for a reproducible shuffle.
    #[arg(long)]
    seed: Option<u64>,

    /// Comma-separated list of recognized image extensions.
    #[arg(long, value_delimiter = ',', default_value = "jpg,png")]
    ext: Vec<String>,

    /// Match image extensions case-sensitively.
    #[arg(long)]
    case_sensitive_ext: bool,

    /// Log debug details, including ffmpeg command lines.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn randomize(&self) -> bool {
        self.extra.iter().any(|t| t == RANDOMIZE_TOKEN)
    }

    fn audio_request(&self) -> anyhow::Result<Option<flashcut::AudioRequest>> {
        let Some(locator) = self.extra.get(1) else {
            return Ok(None);
        };
        let Some(start) = self.extra.get(2) else {
            return Err(flashcut::FlashcutError::validation(
                "an audio locator requires a start time (MM:SS) in the next slot",
            )
            .into());
        };
        let start: flashcut::AudioStart = start.parse()?;
        Ok(Some(flashcut::AudioRequest {
            locator: locator.clone(),
            start,
        }))
    }

    fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::WARN
        } else {
            Level::INFO
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let spec = flashcut::SlideshowSpec::from_tokens(&cli.duration, cli.delay_ms, &cli.format)?
        .with_shuffle(cli.randomize(), cli.seed)
        .with_extensions(flashcut::ExtensionFilter::new(&cli.ext, cli.case_sensitive_ext));
    let audio = cli.audio_request()?;

    let show = flashcut::Slideshow::new(spec)?;
    let mut job = flashcut::SlideshowJob::new(&cli.image_dir, &cli.output);
    if let Some(audio) = audio {
        job = job.with_audio(audio);
    }

    let report = show
        .run(&job, &flashcut::AutoProvider::default())
        .with_context(|| format!("build slideshow '{}'", cli.output.display()))?;

    eprintln!("wrote {}", report.silent_path.display());
    if let Some(muxed) = &report.muxed_path {
        eprintln!("wrote {}", muxed.display());
    }
    Ok(())
}
