use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FlashcutError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FlashcutError::no_images("x")
            .to_string()
            .contains("no images found:")
    );
    assert!(
        FlashcutError::empty_video("x")
            .to_string()
            .contains("empty video:")
    );
    assert!(
        FlashcutError::audio_acquisition("x")
            .to_string()
            .contains("audio acquisition error:")
    );
    assert!(
        FlashcutError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn window_error_reports_bounds() {
    let err = FlashcutError::AudioWindowOutOfRange {
        start: 10.0,
        end: 40.0,
        available: 25.5,
    };
    let msg = err.to_string();
    assert!(msg.contains("10.000s"));
    assert!(msg.contains("40.000s"));
    assert!(msg.contains("25.500s"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FlashcutError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
