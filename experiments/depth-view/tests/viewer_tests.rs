use {
    base::Vec2,
    depth_view::*,
    image::{ColorRaster, Colorizer, DepthFrame, Rgba},
    std::{
        io::Write,
        sync::{Arc, Mutex},
        time::Duration,
    },
    video::{DepthIn, DepthInConfig, Replay, ReplayStep},
};

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[derive(Default)]
struct RecordingSurface {
    cursor: Option<(f32, f32)>,
    keys: Vec<ViewerKey>,
    drawn: Vec<(Vec2<usize>, ColorRaster)>,
}

impl Surface for RecordingSurface {
    fn cursor(&self) -> Option<(f32, f32)> {
        self.cursor
    }

    fn key_pressed(&self, key: ViewerKey) -> bool {
        self.keys.contains(&key)
    }

    fn draw(&mut self, offset: Vec2<usize>, raster: &ColorRaster) {
        self.drawn.push((offset, raster.clone()));
    }
}

// 4x2 frame, 0.25 m per unit, raw value 2 everywhere except a zero corner
fn frame() -> DepthFrame {
    DepthFrame::from_u16(Vec2::new(4, 2), 0.25, &[0, 2, 2, 2, 2, 2, 2, 2]).unwrap()
}

fn viewer(steps: Vec<ReplayStep>, clear: bool) -> (DepthViewer, SharedBuf) {
    let depthin = DepthIn::open(Box::new(Replay::new(steps)), DepthInConfig::default()).unwrap();
    let out = SharedBuf::default();
    let status = StatusLine::new(Box::new(out.clone()), clear);
    (DepthViewer::new(depthin, Colorizer::new(), status), out)
}

#[test]
fn test_update_draws_colorized_frame() {
    let (mut viewer, _) = viewer(vec![ReplayStep::Frame(frame())], false);
    let mut surface = RecordingSurface::default();
    assert!(viewer.on_update(&mut surface, Duration::ZERO).unwrap());
    assert_eq!(viewer.frames(), 1);
    assert_eq!(surface.drawn.len(), 1);
    let (offset, raster) = &surface.drawn[0];
    assert_eq!(*offset, Vec2::zero());
    assert_eq!(raster.size(), Vec2::new(4, 2));
    assert_eq!(raster.pixel(0, 0), Some(Rgba::opaque(255, 0, 0)));
}

#[test]
fn test_update_reports_distance_under_cursor() {
    let (mut viewer, out) = viewer(vec![ReplayStep::Frame(frame())], false);
    let mut surface = RecordingSurface {
        cursor: Some((1.5, 1.2)),
        ..Default::default()
    };
    viewer.on_update(&mut surface, Duration::ZERO).unwrap();
    assert_eq!(
        out.text(),
        "x: 1 y: 1 = (1, 1) - Distance: 0.5 meters, scaling factor: 1\n"
    );
}

#[test]
fn test_status_line_clears_screen() {
    let (mut viewer, out) = viewer(vec![ReplayStep::Frame(frame())], true);
    let mut surface = RecordingSurface {
        cursor: Some((0.0, 0.0)),
        ..Default::default()
    };
    viewer.on_update(&mut surface, Duration::ZERO).unwrap();
    assert!(out.text().starts_with("\x1b[2J\x1b[1;1H"));
    assert!(out.text().ends_with("Distance: 0 meters, scaling factor: 1\n"));
}

#[test]
fn test_no_report_off_frame() {
    let (mut viewer, out) = viewer(
        vec![ReplayStep::Frame(frame()), ReplayStep::Frame(frame())],
        false,
    );
    let mut surface = RecordingSurface {
        cursor: Some((4.0, 0.0)),
        ..Default::default()
    };
    viewer.on_update(&mut surface, Duration::ZERO).unwrap();
    surface.cursor = None;
    viewer.on_update(&mut surface, Duration::ZERO).unwrap();
    assert_eq!(out.text(), "");
    assert_eq!(surface.drawn.len(), 2);
}

#[test]
fn test_keys_scale_readout() {
    let (mut viewer, _) = viewer(
        vec![ReplayStep::Frame(frame()), ReplayStep::Frame(frame())],
        false,
    );
    let mut surface = RecordingSurface {
        keys: vec![ViewerKey::Up],
        ..Default::default()
    };
    viewer.on_update(&mut surface, Duration::ZERO).unwrap();
    assert!((viewer.picker().scaling_factor() - 1.06).abs() < 1e-6);

    surface.keys = vec![ViewerKey::Down];
    viewer.on_update(&mut surface, Duration::ZERO).unwrap();
    assert!((viewer.picker().scaling_factor() - 1.0).abs() < 1e-6);
}

#[test]
fn test_recovered_capture_keeps_running() {
    let (mut viewer, _) = viewer(
        vec![ReplayStep::Fail("usb reset".to_string()), ReplayStep::Frame(frame())],
        false,
    );
    let mut surface = RecordingSurface::default();
    assert!(viewer.on_update(&mut surface, Duration::ZERO).unwrap());
    assert_eq!(surface.drawn.len(), 1);
}

#[test]
fn test_unrecoverable_capture_ends_update() {
    let (mut viewer, _) = viewer(vec![ReplayStep::Fail("gone".to_string())], false);
    let mut surface = RecordingSurface::default();
    let error = viewer.on_update(&mut surface, Duration::ZERO).unwrap_err();
    assert!(error.is_unrecoverable_capture());
    assert!(surface.drawn.is_empty());
    assert_eq!(viewer.frames(), 0);
}
