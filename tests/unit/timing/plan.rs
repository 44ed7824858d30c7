use super::*;
use crate::config::spec::FormatType;

#[test]
fn zero_delay_is_native_rate() {
    let plan = FrameTimingPlan::compute(DurationClass::Short, 0, 30).unwrap();
    assert_eq!(plan.fps, Fps { num: 30, den: 1 });
    assert_eq!(plan.required_image_count, 900);

    let plan = FrameTimingPlan::compute(DurationClass::Long, 0, 30).unwrap();
    assert_eq!(plan.required_image_count, 1800);
}

#[test]
fn effective_fps_matches_interval_formula() {
    for delay_ms in [0u64, 1, 7, 33, 100, 250, 1000, 5000] {
        let plan = FrameTimingPlan::compute(DurationClass::Short, delay_ms, 30).unwrap();
        let expected = 1.0 / (1.0 / 30.0 + delay_ms as f64 / 1000.0);
        assert!(
            (plan.effective_fps() - expected).abs() < 1e-9,
            "delay {delay_ms}: {} vs {expected}",
            plan.effective_fps()
        );
    }
}

#[test]
fn effective_fps_strictly_decreases_with_delay() {
    let mut prev = f64::INFINITY;
    for delay_ms in 0u64..200 {
        let fps = FrameTimingPlan::compute(DurationClass::Short, delay_ms, 30)
            .unwrap()
            .effective_fps();
        assert!(fps < prev);
        prev = fps;
    }
}

#[test]
fn required_count_is_floor_of_length_times_fps() {
    // 100ms delay: interval = 1/30 + 1/10 = 2/15s, fps = 7.5, 30s -> 225 frames.
    let plan = FrameTimingPlan::compute(DurationClass::Short, 100, 30).unwrap();
    assert_eq!(plan.fps, Fps { num: 15, den: 2 });
    assert_eq!(plan.required_image_count, 225);

    // 7ms delay: fps = 30000/1210, 30s -> floor(743.8..) = 743.
    let plan = FrameTimingPlan::compute(DurationClass::Short, 7, 30).unwrap();
    assert_eq!(plan.required_image_count, 743);
}

#[test]
fn huge_delay_collapses_to_one_or_zero_frames() {
    let plan = FrameTimingPlan::compute(DurationClass::Short, 29_000, 30).unwrap();
    assert_eq!(plan.required_image_count, 1);

    let plan = FrameTimingPlan::compute(DurationClass::Short, 60_000, 30).unwrap();
    assert_eq!(plan.required_image_count, 0);
    assert!(plan.effective_fps() > 0.0);
}

#[test]
fn for_spec_validates_first() {
    let mut spec = SlideshowSpec::new(DurationClass::Short, 0, FormatType::Square);
    assert_eq!(
        FrameTimingPlan::for_spec(&spec).unwrap().required_image_count,
        900
    );
    spec.max_frame_rate = 0;
    assert!(FrameTimingPlan::for_spec(&spec).is_err());
}

#[test]
fn duration_for_frames_uses_interval() {
    let plan = FrameTimingPlan::compute(DurationClass::Short, 0, 30).unwrap();
    assert!((plan.duration_for_frames(10) - 10.0 / 30.0).abs() < 1e-12);
}
