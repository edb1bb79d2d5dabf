use {
    crate::*,
    image::DepthFrame,
    std::time::Duration,
};

// wait per attempt unless configured otherwise
const DEFAULT_TIMEOUT_MS: u64 = 1000;

// fresh sessions tried after the first attempt fails
const DEFAULT_MAX_RETRIES: usize = 2;

/// Outcome of one blocking wait that did not fault.
#[derive(Debug, Clone, PartialEq)]
pub enum Capture {
    Frame(DepthFrame),
    /// Nothing arrived in time. Expected every now and then.
    Timeout,
}

/// One camera session.
///
/// `open` starts a session and its stream, `close` stops the stream and
/// releases every handle so a later `open` starts from nothing.
pub trait DepthSource: Send {
    fn open(&mut self) -> Result<(), VideoError>;
    fn close(&mut self);
    fn wait_for_frame(&mut self, timeout: Duration) -> Result<Capture, VideoError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepthInConfig {
    timeout: Duration,
    max_retries: usize,
}

impl Default for DepthInConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl DepthInConfig {
    /// Set how long each attempt blocks.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set how many fresh sessions are tried after a failed attempt.
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn max_retries(&self) -> usize {
        self.max_retries
    }
}

/// Frame acquisition with bounded session recovery.
///
/// When an attempt times out or faults, the session is torn down and
/// reopened up to `max_retries` times. If that does not produce a frame the
/// first failure is returned wrapped in [`VideoError::Unrecoverable`], and the
/// caller is expected to stop using this `DepthIn`.
///
/// After a recovery nothing carries over from earlier frames: size, depth
/// units and buffers may all differ.
pub struct DepthIn {
    source: Box<dyn DepthSource>,
    config: DepthInConfig,
    recoveries: usize,
}

impl DepthIn {
    pub fn open(mut source: Box<dyn DepthSource>, config: DepthInConfig) -> Result<Self, VideoError> {
        source.open()?;
        log::info!(
            "depth input open: timeout {} ms, {} retries",
            config.timeout.as_millis(),
            config.max_retries
        );
        Ok(Self {
            source,
            config,
            recoveries: 0,
        })
    }

    pub fn config(&self) -> &DepthInConfig {
        &self.config
    }

    /// Number of times a fresh session rescued a failed attempt.
    pub fn recoveries(&self) -> usize {
        self.recoveries
    }

    pub fn acquire_frame(&mut self) -> Result<DepthFrame, VideoError> {
        self.acquire_frame_with_timeout(self.config.timeout)
    }

    pub fn acquire_frame_with_timeout(&mut self, timeout: Duration) -> Result<DepthFrame, VideoError> {
        let original = match attempt(self.source.as_mut(), timeout) {
            Ok(frame) => return Ok(frame),
            Err(error) => error,
        };
        log::warn!("depth capture failed: {}", original);

        for retry in 1..=self.config.max_retries {
            log::info!("restarting depth session ({}/{})", retry, self.config.max_retries);
            self.source.close();
            if let Err(error) = self.source.open() {
                log::debug!("retry {}: reopen failed: {}", retry, error);
                continue;
            }
            match attempt(self.source.as_mut(), timeout) {
                Ok(frame) => {
                    self.recoveries += 1;
                    log::info!("depth session recovered after {} retries", retry);
                    return Ok(frame);
                }
                Err(error) => log::debug!("retry {}: capture failed: {}", retry, error),
            }
        }

        log::warn!("giving up on depth session after {} retries", self.config.max_retries);
        Err(VideoError::Unrecoverable {
            original: Box::new(original),
        })
    }
}

fn attempt(source: &mut dyn DepthSource, timeout: Duration) -> Result<DepthFrame, VideoError> {
    match source.wait_for_frame(timeout)? {
        Capture::Frame(frame) => Ok(frame),
        Capture::Timeout => Err(VideoError::Timeout(timeout)),
    }
}

impl Drop for DepthIn {
    fn drop(&mut self) {
        self.source.close();
    }
}

mod replay;
pub use replay::*;

mod synthetic;
pub use synthetic::*;

#[cfg(feature = "realsense")]
pub mod realsense;
