use {
    base::{FileLogger, StdoutLogger, format_record, format_timestamp, init_file_logger},
    log::{LevelFilter, Log},
    std::fs,
};

fn record_at(level: log::Level) -> log::Metadata<'static> {
    log::MetadataBuilder::new().level(level).target("test").build()
}

#[test]
fn test_timestamp_layout() {
    let ts = format_timestamp();
    assert_eq!(ts.len(), 19);
    assert_eq!(&ts[4..5], "-");
    assert_eq!(&ts[7..8], "-");
    assert_eq!(&ts[10..11], "T");
    assert_eq!(&ts[13..14], ":");
    assert_eq!(&ts[16..17], ":");
}

#[test]
fn test_stdout_logger_filters_by_level() {
    let logger = StdoutLogger::new(LevelFilter::Warn);
    assert!(logger.enabled(&record_at(log::Level::Error)));
    assert!(logger.enabled(&record_at(log::Level::Warn)));
    assert!(!logger.enabled(&record_at(log::Level::Info)));
    assert!(!logger.enabled(&record_at(log::Level::Debug)));
}

#[test]
fn test_format_record_contains_location_and_message() {
    let line = format_record(
        &log::Record::builder()
            .level(log::Level::Error)
            .file(Some("depthin.rs"))
            .line(Some(42))
            .args(format_args!("camera went away"))
            .build(),
    );
    assert!(line.contains("[ERROR]"));
    assert!(line.contains("depthin.rs:42"));
    assert!(line.ends_with("camera went away"));
}

#[test]
fn test_file_logger_writes_one_file_per_day() {
    let dir = std::env::temp_dir().join(format!("depth-view-log-{}-write", std::process::id()));
    let _ = fs::remove_dir_all(&dir);

    let logger = FileLogger::new(&dir, LevelFilter::Info).expect("log dir");
    logger.log(
        &log::Record::builder()
            .level(log::Level::Info)
            .file(Some("viewer.rs"))
            .line(Some(3))
            .args(format_args!("recovered after 1 retry"))
            .build(),
    );
    logger.log(
        &log::Record::builder()
            .level(log::Level::Debug)
            .args(format_args!("too chatty"))
            .build(),
    );
    logger.flush();

    let entries: Vec<_> = fs::read_dir(&dir).unwrap().filter_map(|e| e.ok()).collect();
    assert_eq!(entries.len(), 1);
    let content = fs::read_to_string(entries[0].path()).unwrap();
    assert!(content.contains("viewer.rs:3"));
    assert!(content.contains("recovered after 1 retry"));
    assert!(!content.contains("too chatty"));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_init_file_logger_rejects_unwritable_dir() {
    assert!(init_file_logger("/proc/nonexistent/depth-view", None).is_err());
}
