use {
    crate::*,
    image::DepthFrame,
    std::{
        collections::VecDeque,
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
        time::Duration,
    },
};

/// What a [`Replay`] does on its next call.
#[derive(Debug, Clone)]
pub enum ReplayStep {
    /// `wait_for_frame` returns this frame.
    Frame(DepthFrame),
    /// `wait_for_frame` reports a timeout.
    Timeout,
    /// `wait_for_frame` fails with a device error.
    Fail(String),
    /// The next `open` fails with a device error.
    RefuseOpen(String),
}

/// Session and wait counters, shared with the [`Replay`] they came from.
#[derive(Debug, Clone, Default)]
pub struct ReplayCounters {
    opens: Arc<AtomicUsize>,
    closes: Arc<AtomicUsize>,
    waits: Arc<AtomicUsize>,
}

impl ReplayCounters {
    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::Relaxed)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::Relaxed)
    }

    pub fn waits(&self) -> usize {
        self.waits.load(Ordering::Relaxed)
    }
}

/// Scripted depth source. Plays back its steps in order, then reports
/// timeouts forever, like a camera that went quiet.
pub struct Replay {
    steps: VecDeque<ReplayStep>,
    open: bool,
    counters: ReplayCounters,
}

impl Replay {
    pub fn new(steps: impl IntoIterator<Item = ReplayStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            open: false,
            counters: ReplayCounters::default(),
        }
    }

    pub fn counters(&self) -> ReplayCounters {
        self.counters.clone()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl DepthSource for Replay {
    fn open(&mut self) -> Result<(), VideoError> {
        self.counters.opens.fetch_add(1, Ordering::Relaxed);
        if let Some(ReplayStep::RefuseOpen(msg)) = self.steps.front() {
            let msg = msg.clone();
            self.steps.pop_front();
            return Err(VideoError::Device(msg));
        }
        self.open = true;
        Ok(())
    }

    fn close(&mut self) {
        if self.open {
            self.counters.closes.fetch_add(1, Ordering::Relaxed);
        }
        self.open = false;
    }

    fn wait_for_frame(&mut self, _timeout: Duration) -> Result<Capture, VideoError> {
        if !self.open {
            return Err(VideoError::Stream("session not open".to_string()));
        }
        self.counters.waits.fetch_add(1, Ordering::Relaxed);
        match self.steps.pop_front() {
            Some(ReplayStep::Frame(frame)) => Ok(Capture::Frame(frame)),
            Some(ReplayStep::Timeout) | None => Ok(Capture::Timeout),
            Some(ReplayStep::Fail(msg)) => Err(VideoError::Device(msg)),
            // an open refusal queued behind a wait applies to the next open
            Some(step @ ReplayStep::RefuseOpen(_)) => {
                self.steps.push_front(step);
                Ok(Capture::Timeout)
            }
        }
    }
}
