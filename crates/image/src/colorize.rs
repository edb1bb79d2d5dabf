use {crate::*, rayon::prelude::*};

/// Stretches the near range of a Z16 frame across the whole hue ramp.
pub const DEFAULT_GAIN: f32 = 5.0;

/// Color for a 16-bit sample: normalize, apply `gain`, run through [`hue_map`].
pub fn depth16_to_rgba(raw: u16, gain: f32) -> Rgba {
    hue_map(raw as f32 / u16::MAX as f32 * gain)
}

/// Color for a 32-bit sample: the high 16 bits truncated to 8, inverted so
/// closer is brighter.
pub fn depth32_to_rgba(raw: u32) -> Rgba {
    let level = (raw / 65536) as u8;
    Rgba::gray(255 - level)
}

/// Turns depth frames into a displayable raster.
///
/// The raster is kept between calls and only reallocated when the frame size
/// changes.
pub struct Colorizer {
    gain: f32,
    raster: ColorRaster,
}

impl Default for Colorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Colorizer {
    pub fn new() -> Self {
        Self {
            gain: DEFAULT_GAIN,
            raster: ColorRaster::new(base::Vec2::zero()),
        }
    }

    pub fn with_gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }

    pub fn gain(&self) -> f32 {
        self.gain
    }

    pub fn raster(&self) -> &ColorRaster {
        &self.raster
    }

    pub fn colorize(&mut self, frame: &DepthFrame) -> &ColorRaster {
        if self.raster.size() != frame.size() {
            log::debug!(
                "resizing raster from {} to {}",
                self.raster.size(),
                frame.size()
            );
            self.raster = ColorRaster::new(frame.size());
        }
        if frame.size().area() == 0 {
            return &self.raster;
        }

        let gain = self.gain;
        let format = frame.format();
        self.raster
            .pixels_mut()
            .par_chunks_mut(frame.width())
            .enumerate()
            .for_each(|(y, out)| {
                let row = frame.row(y);
                match format {
                    SampleFormat::Z16 => {
                        for (pixel, raw) in out.iter_mut().zip(row.chunks_exact(2)) {
                            *pixel = depth16_to_rgba(u16::from_ne_bytes([raw[0], raw[1]]), gain);
                        }
                    }
                    SampleFormat::Z32 => {
                        for (pixel, raw) in out.iter_mut().zip(row.chunks_exact(4)) {
                            *pixel = depth32_to_rgba(u32::from_ne_bytes([
                                raw[0], raw[1], raw[2], raw[3],
                            ]));
                        }
                    }
                }
            });

        &self.raster
    }
}
