use {
    image::FrameError,
    std::{error::Error, time::Duration},
    video::VideoError,
};

#[test]
fn test_call_error_keeps_function_and_args() {
    let error = VideoError::call("rs2_pipeline_wait_for_frames", "timeout=1000ms", "Frame didn't arrive");
    assert_eq!(
        error.failed_call().as_deref(),
        Some("rs2_pipeline_wait_for_frames(timeout=1000ms)")
    );
    assert_eq!(
        error.to_string(),
        "error calling rs2_pipeline_wait_for_frames(timeout=1000ms): Frame didn't arrive"
    );
}

#[test]
fn test_unrecoverable_exposes_original() {
    let error = VideoError::Unrecoverable {
        original: Box::new(VideoError::call("rs2_pipeline_start", "", "busy")),
    };
    assert_eq!(error.failed_call().as_deref(), Some("rs2_pipeline_start()"));
    assert!(error.source().is_some());
    assert!(error.to_string().starts_with("capture unrecoverable: "));
    assert!(!error.is_timeout());
}

#[test]
fn test_timeout_display() {
    let error = VideoError::Timeout(Duration::from_millis(5000));
    assert_eq!(error.to_string(), "no frame within 5000 ms");
    assert!(error.is_timeout());
    assert!(error.failed_call().is_none());
}

#[test]
fn test_from_frame_error() {
    let error: VideoError = FrameError::UnsupportedSampleSize(3).into();
    assert!(matches!(error, VideoError::Frame(FrameError::UnsupportedSampleSize(3))));
}

#[test]
fn test_from_io_error() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no /dev/video0");
    let error: VideoError = io.into();
    assert!(matches!(error, VideoError::Device(_)));
}
