use {image::FrameError, std::fmt, std::time::Duration};

#[derive(Debug)]
pub enum VideoError {
    Device(String),
    Stream(String),
    /// An SDK call failed; keeps the call and its arguments for the log.
    Call {
        function: String,
        args: String,
        message: String,
    },
    Timeout(Duration),
    Frame(FrameError),
    /// Capture failed and every recovery attempt failed too. Holds the first
    /// failure, not the ones seen while retrying.
    Unrecoverable { original: Box<VideoError> },
}

impl VideoError {
    pub fn call(function: &str, args: impl Into<String>, err: impl fmt::Display) -> Self {
        VideoError::Call {
            function: function.to_string(),
            args: args.into(),
            message: err.to_string(),
        }
    }

    /// `function(args)` of the failing SDK call, if known.
    pub fn failed_call(&self) -> Option<String> {
        match self {
            VideoError::Call { function, args, .. } => Some(format!("{function}({args})")),
            VideoError::Unrecoverable { original } => original.failed_call(),
            _ => None,
        }
    }

    /// The first failure behind this error.
    pub fn original(&self) -> &VideoError {
        match self {
            VideoError::Unrecoverable { original } => original.original(),
            other => other,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self.original(), VideoError::Timeout(_))
    }

    pub fn is_unrecoverable(&self) -> bool {
        matches!(self, VideoError::Unrecoverable { .. })
    }
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::Device(msg) => write!(f, "device error: {msg}"),
            VideoError::Stream(msg) => write!(f, "stream error: {msg}"),
            VideoError::Call {
                function,
                args,
                message,
            } => write!(f, "error calling {function}({args}): {message}"),
            VideoError::Timeout(timeout) => {
                write!(f, "no frame within {} ms", timeout.as_millis())
            }
            VideoError::Frame(err) => write!(f, "frame error: {err}"),
            VideoError::Unrecoverable { original } => {
                write!(f, "capture unrecoverable: {original}")
            }
        }
    }
}

impl std::error::Error for VideoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VideoError::Frame(err) => Some(err),
            VideoError::Unrecoverable { original } => Some(original.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VideoError {
    fn from(err: std::io::Error) -> Self {
        VideoError::Device(err.to_string())
    }
}

impl From<FrameError> for VideoError {
    fn from(err: FrameError) -> Self {
        VideoError::Frame(err)
    }
}
