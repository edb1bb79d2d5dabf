use {crate::*, std::time::Duration};

// pause before starting over after a lost session
const WAIT_BEFORE_RESTART_MS: u64 = 100;

/// What happens after the depth session is lost for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RestartPolicy {
    /// Stop and report the failure.
    #[default]
    Exit,
    /// Start a fresh session and window, as often as it takes.
    Forever,
}

/// Run `session` until it ends normally, restarting it after unrecoverable
/// capture failures when `policy` says so. Any other error ends the run.
pub fn supervise<F>(policy: RestartPolicy, mut session: F) -> Result<(), ViewerError>
where
    F: FnMut() -> Result<(), ViewerError>,
{
    supervise_with_delay(policy, Duration::from_millis(WAIT_BEFORE_RESTART_MS), &mut session)
}

pub fn supervise_with_delay<F>(policy: RestartPolicy, delay: Duration, mut session: F) -> Result<(), ViewerError>
where
    F: FnMut() -> Result<(), ViewerError>,
{
    let mut restarts = 0usize;
    loop {
        match session() {
            Ok(()) => return Ok(()),
            Err(error) if error.is_unrecoverable_capture() && policy == RestartPolicy::Forever => {
                restarts += 1;
                log::warn!("{}; starting over (restart {})", error, restarts);
                std::thread::sleep(delay);
            }
            Err(error) => return Err(error),
        }
    }
}
