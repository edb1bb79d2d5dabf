use {
    base::Vec2,
    image::{DepthFrame, Picker, SCALING_STEP},
};

fn frame() -> DepthFrame {
    // 3x2, raw values in millimetres
    DepthFrame::from_u16(Vec2::new(3, 2), 0.001, &[100, 200, 300, 400, 500, 600]).unwrap()
}

#[test]
fn test_cursor_one_past_bounds_yields_nothing() {
    let frame = frame();
    let picker = Picker::new();
    assert_eq!(picker.pick(&frame, Some((3.0, 2.0))), None);
    assert_eq!(picker.pick(&frame, Some((3.0, 0.0))), None);
    assert_eq!(picker.pick(&frame, Some((0.0, 2.0))), None);
}

#[test]
fn test_cursor_at_last_pixel() {
    let frame = frame();
    let mut picker = Picker::new();
    picker.scale_up();
    let sample = picker.pick(&frame, Some((2.0, 1.0))).unwrap();
    assert_eq!(sample.position, Vec2::new(2, 1));
    assert_eq!(sample.scaling_factor, SCALING_STEP);
    assert_eq!(sample.distance, frame.distance_at(2, 1) * SCALING_STEP);
}

#[test]
fn test_no_cursor_or_negative_cursor() {
    let frame = frame();
    let picker = Picker::new();
    assert_eq!(picker.pick(&frame, None), None);
    assert_eq!(picker.pick(&frame, Some((-0.5, 0.0))), None);
    assert_eq!(picker.pick(&frame, Some((0.0, -1.0))), None);
    assert_eq!(picker.pick(&frame, Some((f32::NAN, 0.0))), None);
}

#[test]
fn test_fractional_cursor_selects_containing_pixel() {
    let frame = frame();
    let sample = Picker::new().pick(&frame, Some((1.7, 0.2))).unwrap();
    assert_eq!(sample.position, Vec2::new(1, 0));
    assert_eq!(sample.distance, frame.distance_at(1, 0));
}

#[test]
fn test_scaling_steps() {
    let mut picker = Picker::new();
    assert_eq!(picker.scaling_factor(), 1.0);
    picker.scale_up();
    picker.scale_up();
    assert!((picker.scaling_factor() - 1.06 * 1.06).abs() < 1e-6);
    picker.scale_down();
    picker.scale_down();
    assert!((picker.scaling_factor() - 1.0).abs() < 1e-6);
    picker.scale_down();
    assert!((picker.scaling_factor() - 1.0 / 1.06).abs() < 1e-6);
}

#[test]
fn test_status_line_has_position_distance_and_scale() {
    let frame = frame();
    let picker = Picker::new().with_scaling_factor(2.0);
    let line = picker.pick(&frame, Some((0.0, 1.0))).unwrap().to_string();
    assert!(line.contains("x: 0 y: 1"));
    assert!(line.contains("Distance: 0.8 meters"));
    assert!(line.contains("scaling factor: 2"));
}
