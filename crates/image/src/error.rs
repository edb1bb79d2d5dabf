use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    UnsupportedSampleSize(usize),
    StrideTooSmall { stride: usize, row_bytes: usize },
    BufferTooSmall { len: usize, needed: usize },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::UnsupportedSampleSize(bytes) => {
                write!(f, "unsupported depth sample size: {bytes} bytes")
            }
            FrameError::StrideTooSmall { stride, row_bytes } => {
                write!(f, "stride of {stride} bytes is shorter than a {row_bytes} byte row")
            }
            FrameError::BufferTooSmall { len, needed } => {
                write!(f, "depth buffer holds {len} bytes, frame needs {needed}")
            }
        }
    }
}

impl std::error::Error for FrameError {}
