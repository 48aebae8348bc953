use log::{LevelFilter, Log, Metadata, Record};

static LOGGER: StderrLogger = StderrLogger;

/// Writes records to stderr so they never mix with the rendered board on stdout.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let file = record.file().unwrap_or("?");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        eprintln!(
            "[{}][{}:{}] {}",
            record.level(),
            file_name,
            record.line().unwrap_or(0),
            record.args()
        );
    }

    fn flush(&self) {}
}

pub fn init_logger(level: LevelFilter) -> anyhow::Result<()> {
    log::set_logger(&LOGGER).map_err(|err| anyhow::anyhow!("failed to install logger: {err}"))?;
    log::set_max_level(level);
    Ok(())
}
