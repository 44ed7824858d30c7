use super::*;
use crate::{
    config::spec::{DurationClass, FormatType},
    encode::sink::InMemorySink,
    foundation::{core::Fps, error::FlashcutError},
};

fn write_images(dir: &Path, count: u8) {
    for i in 0..count {
        let shade = 10 + i * 5;
        image::RgbImage::from_pixel(64, 48, image::Rgb([shade, shade, shade]))
            .save(dir.join(format!("img_{i:02}.jpg")))
            .unwrap();
    }
}

fn centre_shades(sink: &InMemorySink) -> Vec<[u8; 3]> {
    sink.frames().iter().map(|(_, c)| c.pixel(320, 240)).collect()
}

#[test]
fn short_square_without_delay_uses_every_image() {
    let dir = tempfile::tempdir().unwrap();
    write_images(dir.path(), 10);

    let show =
        Slideshow::new(SlideshowSpec::new(DurationClass::Short, 0, FormatType::Square)).unwrap();
    assert_eq!(show.plan().fps, Fps::new(30, 1).unwrap());
    assert_eq!(show.plan().required_image_count, 900);

    let mut sink = InMemorySink::new();
    let (selection, stats) = show.render_silent(dir.path(), &mut sink).unwrap();

    assert_eq!(selection.available, 10);
    assert_eq!(selection.shortfall(), 890);
    assert_eq!(stats.frames_written, 10);
    assert_eq!(stats.frames_skipped, 0);

    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height), (640, 480));
    assert_eq!(cfg.fps, Fps::new(30, 1).unwrap());
    assert!(sink.is_ended());
    for (i, (idx, canvas)) in sink.frames().iter().enumerate() {
        assert_eq!(idx.0, i as u64);
        assert_eq!((canvas.width, canvas.height), (640, 480));
    }
}

#[test]
fn surplus_images_are_truncated_to_required_count() {
    let dir = tempfile::tempdir().unwrap();
    write_images(dir.path(), 35);

    // 1/30 s + 1 s per frame over 30 s: floor(30 * 30/31) frames.
    let show =
        Slideshow::new(SlideshowSpec::new(DurationClass::Short, 1000, FormatType::Square)).unwrap();
    assert_eq!(show.plan().fps, Fps::new(30, 31).unwrap());
    assert_eq!(show.plan().required_image_count, 29);

    let mut sink = InMemorySink::new();
    let (selection, stats) = show.render_silent(dir.path(), &mut sink).unwrap();
    assert_eq!(selection.images.len(), 29);
    assert_eq!(stats.frames_written, 29);
    assert_eq!(
        selection.images.last().unwrap().file_name().unwrap(),
        "img_28.jpg"
    );
}

#[test]
fn empty_directory_fails_before_the_sink_is_opened() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.txt"), b"not an image").unwrap();

    let show = Slideshow::new(SlideshowSpec::new(DurationClass::Short, 0, FormatType::Hd)).unwrap();
    let mut sink = InMemorySink::new();
    let err = show.render_silent(dir.path(), &mut sink).unwrap_err();

    assert!(matches!(err, FlashcutError::NoImagesFound(_)));
    assert!(sink.config().is_none());
    assert!(sink.frames().is_empty());
}

#[test]
fn invalid_spec_is_rejected_up_front() {
    let mut spec = SlideshowSpec::new(DurationClass::Long, 0, FormatType::Hd);
    spec.max_frame_rate = 0;
    assert!(matches!(
        Slideshow::new(spec).unwrap_err(),
        FlashcutError::Validation(_)
    ));
}

#[test]
fn repeated_runs_produce_identical_frames() {
    let dir = tempfile::tempdir().unwrap();
    write_images(dir.path(), 4);
    let show = Slideshow::new(SlideshowSpec::new(DurationClass::Short, 0, FormatType::Hd)).unwrap();

    let mut first = InMemorySink::new();
    let mut second = InMemorySink::new();
    show.render_silent(dir.path(), &mut first).unwrap();
    show.render_silent(dir.path(), &mut second).unwrap();

    assert_eq!(first.frames(), second.frames());
}

#[test]
fn seeded_shuffle_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    write_images(dir.path(), 8);
    let spec = SlideshowSpec::new(DurationClass::Short, 0, FormatType::Square)
        .with_shuffle(true, Some(7));
    let show = Slideshow::new(spec).unwrap();

    let mut a = InMemorySink::new();
    let mut b = InMemorySink::new();
    show.render_silent(dir.path(), &mut a).unwrap();
    show.render_silent(dir.path(), &mut b).unwrap();
    assert_eq!(centre_shades(&a), centre_shades(&b));

    let ordered =
        Slideshow::new(SlideshowSpec::new(DurationClass::Short, 0, FormatType::Square)).unwrap();
    let mut plain = InMemorySink::new();
    ordered.render_silent(dir.path(), &mut plain).unwrap();

    let mut shuffled = centre_shades(&a);
    let mut sorted = centre_shades(&plain);
    shuffled.sort();
    sorted.sort();
    assert_eq!(shuffled, sorted);
}

#[test]
fn missing_directory_is_a_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let show =
        Slideshow::new(SlideshowSpec::new(DurationClass::Short, 0, FormatType::Square)).unwrap();
    let mut sink = InMemorySink::new();
    let err = show
        .render_silent(&dir.path().join("missing"), &mut sink)
        .unwrap_err();
    assert!(matches!(err, FlashcutError::Validation(_)));
}
