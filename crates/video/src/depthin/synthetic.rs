use {
    crate::*,
    base::Vec2,
    image::DepthFrame,
    std::time::{Duration, Instant},
};

// raw value at the far end of the ramp; with the default gain of 5 this spans
// the whole hue range
const RAMP_MAX: u32 = 13107;

// metres per raw unit, same as a D400 in its default preset
const DEPTH_UNITS: f32 = 0.001;

/// Generated depth scene: a diagonal ramp that drifts one pixel per frame.
/// Lets the viewer run without a camera attached.
pub struct Synthetic {
    size: Vec2<usize>,
    frame_interval: Duration,
    next_frame: Option<Instant>,
    tick: usize,
}

impl Synthetic {
    pub fn new(size: Vec2<usize>, frame_rate: f32) -> Self {
        Self {
            size,
            frame_interval: Duration::from_secs_f32(1.0 / frame_rate.max(1.0)),
            next_frame: None,
            tick: 0,
        }
    }

    /// The frame a given tick produces.
    pub fn render(size: Vec2<usize>, tick: usize) -> Result<DepthFrame, VideoError> {
        let period = (size.x + size.y).max(1);
        let samples: Vec<u16> = (0..size.y)
            .flat_map(|y| (0..size.x).map(move |x| (x, y)))
            .map(|(x, y)| (((x + y + tick) % period) as u32 * RAMP_MAX / period as u32) as u16)
            .collect();
        Ok(DepthFrame::from_u16(size, DEPTH_UNITS, &samples)?)
    }
}

impl DepthSource for Synthetic {
    fn open(&mut self) -> Result<(), VideoError> {
        log::info!("synthetic depth source: {} at {:?} per frame", self.size, self.frame_interval);
        self.next_frame = Some(Instant::now());
        Ok(())
    }

    fn close(&mut self) {
        self.next_frame = None;
    }

    fn wait_for_frame(&mut self, timeout: Duration) -> Result<Capture, VideoError> {
        let Some(due) = self.next_frame else {
            return Err(VideoError::Stream("session not open".to_string()));
        };
        let wait = due.saturating_duration_since(Instant::now());
        if wait > timeout {
            std::thread::sleep(timeout);
            return Ok(Capture::Timeout);
        }
        std::thread::sleep(wait);
        // a slow consumer gets frames back to back instead of a burst
        self.next_frame = Some((due + self.frame_interval).max(Instant::now()));
        self.tick += 1;
        Ok(Capture::Frame(Self::render(self.size, self.tick)?))
    }
}
