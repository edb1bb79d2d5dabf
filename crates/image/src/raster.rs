use base::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn gray(value: u8) -> Self {
        Self::opaque(value, value, value)
    }

    /// Packed `0xFFRRGGBB`, the layout minifb expects.
    pub fn to_u32(self) -> u32 {
        0xFF00_0000 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

/// Displayable output of the colorizer, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRaster {
    size: Vec2<usize>,
    pixels: Vec<Rgba>,
}

impl ColorRaster {
    pub fn new(size: Vec2<usize>) -> Self {
        Self {
            size,
            pixels: vec![Rgba::default(); size.area()],
        }
    }

    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.x
    }

    pub fn height(&self) -> usize {
        self.size.y
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x < self.size.x && y < self.size.y {
            Some(self.pixels[y * self.size.x + x])
        } else {
            None
        }
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Rgba]> {
        self.pixels.chunks_exact(self.size.x.max(1))
    }
}
