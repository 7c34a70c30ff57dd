//! Log records emitted by `TraceLayer`.
//!
//! Lives in its own test binary: a process can install only one logger.

use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};
use ninep_templates::*;

struct CaptureLogger;

static RECORDS: OnceLock<Mutex<Vec<(Level, String)>>> = OnceLock::new();
static LOGGER: CaptureLogger = CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Some(records) = RECORDS.get() {
            let mut guard = records.lock().expect("log lock");
            guard.push((record.level(), format!("{}", record.args())));
        }
    }

    fn flush(&self) {}
}

fn init_logger() -> &'static Mutex<Vec<(Level, String)>> {
    let records = RECORDS.get_or_init(|| Mutex::new(Vec::new()));
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);
    records
}

/// Records whose message starts with `label`, so parallel tests stay apart.
fn records_for(label: &str) -> Vec<(Level, String)> {
    let prefix = format!("{label}: ");
    init_logger()
        .lock()
        .expect("log lock")
        .iter()
        .filter(|(_, message)| message.starts_with(&prefix))
        .cloned()
        .collect()
}

#[test]
fn denials_log_at_debug_with_errno_name() {
    init_logger();

    let dir = TraceLayer::new("/denied").layer(ReadOnlyDir);
    assert_eq!(dir.readdir(0, 4096), Err(Errno::ReadOnlyFilesystem));
    assert_eq!(dir.get_xattr("user.tag"), Err(Errno::NotImplemented));

    let stream = TraceLayer::new("/denied/stream").layer(IsDir);
    assert_eq!(stream.write_at(b"x", 0), Err(Errno::IsADirectory));

    assert_eq!(
        records_for("/denied"),
        vec![
            (Level::Debug, "/denied: readdir -> EROFS".to_string()),
            (Level::Debug, "/denied: get_xattr -> ENOSYS".to_string()),
        ]
    );
    assert_eq!(
        records_for("/denied/stream"),
        vec![(Level::Debug, "/denied/stream: write_at -> EISDIR".to_string())]
    );
}

#[test]
fn successes_log_at_trace() {
    init_logger();

    let file = TraceLayer::new("/flushed").layer(ReadOnlyFile);
    assert_eq!(file.flush(), Ok(()));
    assert_eq!(file.remove(), Err(Errno::ReadOnlyFilesystem));

    assert_eq!(
        records_for("/flushed"),
        vec![
            (Level::Trace, "/flushed: flush ok".to_string()),
            (Level::Debug, "/flushed: remove -> EROFS".to_string()),
        ]
    );
}

#[test]
fn composed_nodes_log_under_their_label() {
    init_logger();

    let symlink = TraceLayer::new("/symlink").layer(NotSymlinkFile);
    assert_eq!(symlink.readlink(), Err(Errno::InvalidArgument));

    let file = TraceLayer::new("/notdir").layer(NotDirectoryFile);
    assert_eq!(
        file.mkdir("sub", FileMode(0o755), Uid(0), Gid(0)),
        Err(Errno::NotADirectory)
    );

    assert_eq!(
        records_for("/symlink"),
        vec![(Level::Debug, "/symlink: readlink -> EINVAL".to_string())]
    );
    assert_eq!(
        records_for("/notdir"),
        vec![(Level::Debug, "/notdir: mkdir -> ENOTDIR".to_string())]
    );
}
