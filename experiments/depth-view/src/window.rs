use {
    crate::*,
    base::Vec2,
    image::ColorRaster,
    minifb::{Key, KeyRepeat, MouseMode, Window, WindowOptions},
    std::time::Instant,
};

pub const WINDOW_SIZE: Vec2<usize> = Vec2 { x: 848, y: 480 };

#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub size: Vec2<usize>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: APP_NAME.to_string(),
            size: WINDOW_SIZE,
        }
    }
}

/// Copy `raster` into a packed `0xFFRRGGBB` canvas at `offset`, clipped to
/// the canvas.
pub fn blit(canvas: &mut [u32], canvas_size: Vec2<usize>, raster: &ColorRaster, offset: Vec2<usize>) {
    if offset.x >= canvas_size.x {
        return;
    }
    let width = raster.width().min(canvas_size.x - offset.x);
    for (y, row) in raster.rows().enumerate() {
        let canvas_y = offset.y + y;
        if canvas_y >= canvas_size.y {
            break;
        }
        let start = canvas_y * canvas_size.x + offset.x;
        for (dst, src) in canvas[start..start + width].iter_mut().zip(row) {
            *dst = src.to_u32();
        }
    }
}

struct MinifbSurface<'a> {
    window: &'a Window,
    canvas: &'a mut [u32],
    size: Vec2<usize>,
}

impl Surface for MinifbSurface<'_> {
    fn cursor(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Discard)
    }

    fn key_pressed(&self, key: ViewerKey) -> bool {
        let key = match key {
            ViewerKey::Up => Key::Up,
            ViewerKey::Down => Key::Down,
        };
        self.window.is_key_pressed(key, KeyRepeat::No)
    }

    fn draw(&mut self, offset: Vec2<usize>, raster: &ColorRaster) {
        blit(self.canvas, self.size, raster, offset);
    }
}

/// Drive `app` from a minifb window until it stops, the window is closed, or
/// Escape is pressed.
pub fn run_window(app: &mut dyn App, config: &WindowConfig) -> Result<(), ViewerError> {
    let mut window = Window::new(&config.title, config.size.x, config.size.y, WindowOptions::default())?;
    if !app.on_create()? {
        return Ok(());
    }

    let mut canvas = vec![0u32; config.size.area()];
    let mut last = Instant::now();
    while window.is_open() && !window.is_key_down(Key::Escape) {
        let now = Instant::now();
        let elapsed = now - last;
        last = now;

        canvas.fill(0);
        let keep_running = {
            let mut surface = MinifbSurface {
                window: &window,
                canvas: &mut canvas,
                size: config.size,
            };
            app.on_update(&mut surface, elapsed)?
        };
        if !keep_running {
            break;
        }
        window.update_with_buffer(&canvas, config.size.x, config.size.y)?;
    }
    log::info!("window closed");
    Ok(())
}
