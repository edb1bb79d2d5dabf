use {
    crate::*,
    base::Vec2,
    image::ColorRaster,
    std::time::Duration,
};

/// Keys the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerKey {
    Up,
    Down,
}

/// What an [`App`] can see and touch during one update: the cursor, the
/// keyboard, and a canvas to draw rasters on.
pub trait Surface {
    /// Cursor position in canvas pixels, `None` when it is outside the window.
    fn cursor(&self) -> Option<(f32, f32)>;
    /// True once per press.
    fn key_pressed(&self, key: ViewerKey) -> bool;
    fn draw(&mut self, offset: Vec2<usize>, raster: &ColorRaster);
}

/// Callbacks driven by an event loop such as [`run_window`].
pub trait App {
    /// Called once before the first update. `Ok(false)` cancels the run.
    fn on_create(&mut self) -> Result<bool, ViewerError>;

    /// Called once per displayed frame. `Ok(false)` ends the run normally,
    /// `Err` ends it with a failure.
    fn on_update(&mut self, surface: &mut dyn Surface, elapsed: Duration) -> Result<bool, ViewerError>;
}
