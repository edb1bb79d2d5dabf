use {crate::*, base::Vec2, std::fmt};

/// Factor applied by one Up or Down key press.
pub const SCALING_STEP: f32 = 1.06;

/// Distance read under the cursor for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickedSample {
    pub position: Vec2<usize>,
    /// Metric distance already multiplied by `scaling_factor`.
    pub distance: f32,
    pub scaling_factor: f32,
}

impl fmt::Display for PickedSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = (self.position.x, self.position.y);
        write!(
            f,
            "x: {x} y: {y} = ({x}, {y}) - Distance: {} meters, scaling factor: {}",
            self.distance, self.scaling_factor
        )
    }
}

/// Cursor distance readout with a user adjustable scaling factor.
#[derive(Debug, Clone, PartialEq)]
pub struct Picker {
    scaling_factor: f32,
}

impl Default for Picker {
    fn default() -> Self {
        Self::new()
    }
}

impl Picker {
    pub fn new() -> Self {
        Self {
            scaling_factor: 1.0,
        }
    }

    pub fn with_scaling_factor(mut self, scaling_factor: f32) -> Self {
        self.scaling_factor = scaling_factor;
        self
    }

    pub fn scaling_factor(&self) -> f32 {
        self.scaling_factor
    }

    pub fn scale_up(&mut self) {
        self.scaling_factor *= SCALING_STEP;
    }

    pub fn scale_down(&mut self) {
        self.scaling_factor /= SCALING_STEP;
    }

    /// Reading at an integer pixel, `None` outside the frame.
    pub fn pick_pixel(&self, frame: &DepthFrame, position: Vec2<i64>) -> Option<PickedSample> {
        let bounds = Vec2::new(frame.width() as i64, frame.height() as i64);
        if !bounds.contains(position) {
            return None;
        }
        let position = Vec2::new(position.x as usize, position.y as usize);
        Some(PickedSample {
            position,
            distance: frame.distance_at(position.x, position.y) * self.scaling_factor,
            scaling_factor: self.scaling_factor,
        })
    }

    /// Reading under a window cursor. Fractional coordinates select the pixel
    /// they fall in; `None` when there is no cursor or it is off the frame.
    pub fn pick(&self, frame: &DepthFrame, cursor: Option<(f32, f32)>) -> Option<PickedSample> {
        let (x, y) = cursor?;
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        self.pick_pixel(frame, Vec2::new(x.floor() as i64, y.floor() as i64))
    }
}
