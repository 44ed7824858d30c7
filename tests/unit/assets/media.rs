use super::*;

const SAMPLE: &str = r#"{
  "streams": [
    {
      "codec_type": "video",
      "width": 640,
      "height": 480,
      "r_frame_rate": "15/2",
      "nb_frames": "10",
      "duration": "1.333333"
    },
    {
      "codec_type": "audio",
      "duration": "30.000000"
    }
  ],
  "format": { "duration": "30.010000" }
}"#;

#[test]
fn parses_video_and_audio_streams() {
    let info = parse_probe_json(Path::new("x.mp4"), SAMPLE.as_bytes()).unwrap();
    let video = info.video.clone().unwrap();
    assert_eq!((video.width, video.height), (640, 480));
    assert_eq!(video.fps, Some(Fps { num: 15, den: 2 }));
    assert_eq!(video.frame_count, Some(10));
    assert!((video.duration_secs.unwrap() - 1.333333).abs() < 1e-9);
    assert!(info.has_audio());
    assert!((info.audio_duration_secs.unwrap() - 30.0).abs() < 1e-9);
    assert!((info.duration_secs - 30.01).abs() < 1e-9);
}

#[test]
fn audio_only_file_has_no_video() {
    let json =
        r#"{"streams":[{"codec_type":"audio","duration":"12.5"}],"format":{"duration":"12.5"}}"#;
    let info = parse_probe_json(Path::new("a.mp3"), json.as_bytes()).unwrap();
    assert!(info.video.is_none());
    assert_eq!(info.audio_duration_secs, Some(12.5));
}

#[test]
fn video_without_size_is_an_error() {
    let json = r#"{"streams":[{"codec_type":"video"}]}"#;
    assert!(parse_probe_json(Path::new("v.mp4"), json.as_bytes()).is_err());
}

#[test]
fn ratio_parsing() {
    assert_eq!(parse_ff_ratio("30/1"), Some(Fps { num: 30, den: 1 }));
    assert_eq!(parse_ff_ratio("0/0"), None);
    assert_eq!(parse_ff_ratio("abc"), None);
}
