use {
    crate::*,
    base::Vec2,
    image::{Colorizer, PickedSample, Picker},
    std::{io::Write, time::Duration},
    video::DepthIn,
};

pub const APP_NAME: &str = "RealSense Depth Viewer";

// clear the terminal and home the cursor so the readout overwrites itself
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Where the per-frame distance readout goes.
pub struct StatusLine {
    out: Box<dyn Write>,
    clear: bool,
}

impl StatusLine {
    pub fn stdout(clear: bool) -> Self {
        Self::new(Box::new(std::io::stdout()), clear)
    }

    pub fn new(out: Box<dyn Write>, clear: bool) -> Self {
        Self { out, clear }
    }

    pub fn report(&mut self, sample: &PickedSample) -> std::io::Result<()> {
        if self.clear {
            write!(self.out, "{}", CLEAR_SCREEN)?;
        }
        writeln!(self.out, "{}", sample)?;
        self.out.flush()
    }
}

/// Acquire, colorize, draw, and read out the distance under the cursor, once
/// per update.
pub struct DepthViewer {
    depthin: DepthIn,
    colorizer: Colorizer,
    picker: Picker,
    status: StatusLine,
    frames: u64,
}

impl DepthViewer {
    pub fn new(depthin: DepthIn, colorizer: Colorizer, status: StatusLine) -> Self {
        Self {
            depthin,
            colorizer,
            picker: Picker::new(),
            status,
            frames: 0,
        }
    }

    pub fn picker(&self) -> &Picker {
        &self.picker
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl App for DepthViewer {
    fn on_create(&mut self) -> Result<bool, ViewerError> {
        log::info!("{} ready, colorizer gain {}", APP_NAME, self.colorizer.gain());
        Ok(true)
    }

    fn on_update(&mut self, surface: &mut dyn Surface, elapsed: Duration) -> Result<bool, ViewerError> {
        let recoveries = self.depthin.recoveries();
        let frame = self.depthin.acquire_frame()?;
        if self.depthin.recoveries() != recoveries {
            log::info!("depth stream restarted, now {}", frame.size());
        }
        self.frames += 1;

        let raster = self.colorizer.colorize(&frame);
        surface.draw(Vec2::zero(), raster);

        if let Some(sample) = self.picker.pick(&frame, surface.cursor()) {
            self.status.report(&sample)?;
        }

        if surface.key_pressed(ViewerKey::Up) {
            self.picker.scale_up();
        }
        if surface.key_pressed(ViewerKey::Down) {
            self.picker.scale_down();
        }

        if self.frames % 300 == 0 {
            log::debug!(
                "{} frames, last update took {} ms",
                self.frames,
                elapsed.as_millis()
            );
        }
        Ok(true)
    }
}
