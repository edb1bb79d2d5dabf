use {crate::*, base::Vec2};

/// Encoding of one raw depth sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    /// 16-bit unsigned distance, the usual Z16 stream.
    Z16,
    /// 32-bit unsigned distance.
    Z32,
}

impl SampleFormat {
    pub fn from_bytes_per_sample(bytes: usize) -> Result<Self, FrameError> {
        match bytes {
            2 => Ok(SampleFormat::Z16),
            4 => Ok(SampleFormat::Z32),
            _ => Err(FrameError::UnsupportedSampleSize(bytes)),
        }
    }

    pub fn bytes_per_sample(&self) -> usize {
        match self {
            SampleFormat::Z16 => 2,
            SampleFormat::Z32 => 4,
        }
    }
}

/// One depth image, copied out of the camera's frame buffer.
///
/// Rows start every `stride` bytes; samples are stored in native byte order,
/// as the SDK hands them out. `depth_units` converts a raw sample to metres.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthFrame {
    size: Vec2<usize>,
    format: SampleFormat,
    stride: usize,
    depth_units: f32,
    data: Vec<u8>,
}

impl DepthFrame {
    pub fn new(
        size: Vec2<usize>,
        bytes_per_sample: usize,
        stride: usize,
        depth_units: f32,
        data: Vec<u8>,
    ) -> Result<Self, FrameError> {
        let format = SampleFormat::from_bytes_per_sample(bytes_per_sample)?;
        let row_bytes = size.x * bytes_per_sample;
        if stride < row_bytes {
            return Err(FrameError::StrideTooSmall { stride, row_bytes });
        }

        // the last row does not need its padding
        let needed = match size.y {
            0 => 0,
            rows => stride * (rows - 1) + row_bytes,
        };
        if data.len() < needed {
            return Err(FrameError::BufferTooSmall {
                len: data.len(),
                needed,
            });
        }

        Ok(Self {
            size,
            format,
            stride,
            depth_units,
            data,
        })
    }

    /// Tightly packed 16-bit frame, row-major.
    pub fn from_u16(
        size: Vec2<usize>,
        depth_units: f32,
        samples: &[u16],
    ) -> Result<Self, FrameError> {
        let data = samples.iter().flat_map(|s| s.to_ne_bytes()).collect();
        Self::new(size, 2, size.x * 2, depth_units, data)
    }

    /// Tightly packed 32-bit frame, row-major.
    pub fn from_u32(
        size: Vec2<usize>,
        depth_units: f32,
        samples: &[u32],
    ) -> Result<Self, FrameError> {
        let data = samples.iter().flat_map(|s| s.to_ne_bytes()).collect();
        Self::new(size, 4, size.x * 4, depth_units, data)
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

    pub fn format(&self) -> SampleFormat {
        self.format
    }

    pub fn bytes_per_sample(&self) -> usize {
        self.format.bytes_per_sample()
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn depth_units(&self) -> f32 {
        self.depth_units
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Bytes of row `y`, without the stride padding.
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.size.x * self.bytes_per_sample()]
    }

    /// Raw sample at `(x, y)`. Panics when out of bounds.
    pub fn sample(&self, x: usize, y: usize) -> u32 {
        assert!(
            x < self.size.x && y < self.size.y,
            "sample ({x}, {y}) outside {} frame",
            self.size
        );
        let bytes = self.bytes_per_sample();
        let offset = y * self.stride + x * bytes;
        let raw = &self.data[offset..offset + bytes];
        match self.format {
            SampleFormat::Z16 => u16::from_ne_bytes([raw[0], raw[1]]) as u32,
            SampleFormat::Z32 => u32::from_ne_bytes([raw[0], raw[1], raw[2], raw[3]]),
        }
    }

    /// Distance in metres at `(x, y)`.
    pub fn distance_at(&self, x: usize, y: usize) -> f32 {
        self.sample(x, y) as f32 * self.depth_units
    }
}
