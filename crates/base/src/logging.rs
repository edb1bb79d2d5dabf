//! Backends for the `log` facade.
//!
//! Every crate in the workspace logs through `log::info!` and friends. The
//! binaries pick a sink once at startup with [`init_stdout_logger`] or
//! [`init_file_logger`].

use {
    anyhow::{Context, Result},
    log::{LevelFilter, Log, Metadata, Record},
    std::{
        fs::{File, OpenOptions, create_dir_all},
        io::Write,
        path::PathBuf,
        sync::Mutex,
        time::{SystemTime, UNIX_EPOCH},
    },
};

/// Level used when the caller does not ask for one: everything in debug
/// builds, `Info` and up in release builds.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS`.
pub fn format_timestamp() -> String {
    let secs = unix_secs();
    let (year, month, day) = civil_from_days((secs / 86400) as i64);
    let time_of_day = secs % 86400;
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        year,
        month,
        day,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}

/// Current UTC date as `YYYY-MM-DD`.
pub fn format_today() -> String {
    let (year, month, day) = civil_from_days((unix_secs() / 86400) as i64);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

// days since 1970-01-01 to (year, month, day), Howard Hinnant's algorithm
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}

/// One log line, shared by all sinks.
pub fn format_record(record: &Record) -> String {
    format!(
        "{} [{}] [{:?}] {}:{} - {}",
        format_timestamp(),
        record.level(),
        std::thread::current().id(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}

pub struct StdoutLogger {
    level: LevelFilter,
}

impl StdoutLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{}", format_record(record));
        }
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

struct FileLoggerState {
    dir: PathBuf,
    current_date: String,
    file: File,
}

/// Appends to `<dir>/<YYYY-MM-DD>.log`, switching files when the date changes.
pub struct FileLogger {
    level: LevelFilter,
    state: Mutex<FileLoggerState>,
}

fn open_day_file(dir: &PathBuf, date: &str) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(format!("{}.log", date)))
}

impl FileLogger {
    pub fn new(dir: impl Into<PathBuf>, level: LevelFilter) -> Result<Self> {
        let dir = dir.into();
        create_dir_all(&dir)
            .with_context(|| format!("cannot create log directory {}", dir.display()))?;
        let current_date = format_today();
        let file = open_day_file(&dir, &current_date)
            .with_context(|| format!("cannot open log file in {}", dir.display()))?;
        Ok(Self {
            level,
            state: Mutex::new(FileLoggerState {
                dir,
                current_date,
                file,
            }),
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let today = format_today();
        if today != state.current_date {
            match open_day_file(&state.dir, &today) {
                Ok(file) => {
                    state.file = file;
                    state.current_date = today;
                }
                Err(error) => {
                    // keep writing to yesterday's file
                    eprintln!("failed to roll over log file: {}", error);
                }
            }
        }
        let line = format_record(record);
        if let Err(error) = writeln!(state.file, "{}", line) {
            eprintln!("failed to write log file: {}", error);
            eprintln!("{}", line);
        }
    }

    fn flush(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.file.flush().ok();
    }
}

/// Install a [`StdoutLogger`]. Only the first call per process has an effect.
pub fn init_stdout_logger(level: Option<LevelFilter>) {
    let level = level.unwrap_or_else(default_level);
    if log::set_boxed_logger(Box::new(StdoutLogger::new(level))).is_ok() {
        log::set_max_level(level);
    }
}

/// Install a [`FileLogger`] writing into `dir`. Only the first successful call
/// per process has an effect.
pub fn init_file_logger(dir: impl Into<PathBuf>, level: Option<LevelFilter>) -> Result<()> {
    let level = level.unwrap_or_else(default_level);
    let logger = FileLogger::new(dir, level)?;
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level);
    }
    Ok(())
}

/// Log at error level, flush, and exit the process with status 1.
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
        log::logger().flush();
        std::process::exit(1);
    }};
}
