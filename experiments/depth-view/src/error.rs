use {std::fmt, video::VideoError};

#[derive(Debug)]
pub enum ViewerError {
    Video(VideoError),
    Window(String),
    Io(std::io::Error),
}

impl ViewerError {
    /// True when the depth session is gone for good and only a fresh start
    /// can help.
    pub fn is_unrecoverable_capture(&self) -> bool {
        matches!(self, ViewerError::Video(error) if error.is_unrecoverable())
    }
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::Video(err) => write!(f, "{err}"),
            ViewerError::Window(msg) => write!(f, "window error: {msg}"),
            ViewerError::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewerError::Video(err) => Some(err),
            ViewerError::Io(err) => Some(err),
            ViewerError::Window(_) => None,
        }
    }
}

impl From<VideoError> for ViewerError {
    fn from(err: VideoError) -> Self {
        ViewerError::Video(err)
    }
}

impl From<std::io::Error> for ViewerError {
    fn from(err: std::io::Error) -> Self {
        ViewerError::Io(err)
    }
}

impl From<minifb::Error> for ViewerError {
    fn from(err: minifb::Error) -> Self {
        ViewerError::Window(err.to_string())
    }
}
