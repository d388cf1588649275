use calc_core::{LogEntry, LogLevel, LogOutput};

pub struct CliLogOutput {
    pub verbose: bool,
    pub entries: Vec<LogEntry>,
}

impl CliLogOutput {
    pub const fn new(verbose: bool) -> Self {
        Self {
            verbose,
            entries: Vec::new(),
        }
    }

    pub fn count(&self, level: LogLevel) -> usize {
        self.entries.iter().filter(|e| e.level == level).count()
    }
}

impl LogOutput for CliLogOutput {
    fn log(&mut self, entry: LogEntry) {
        if self.verbose || entry.level != LogLevel::Info {
            eprintln!(
                "[{}] {}: {}",
                entry.level.as_str(),
                entry.event.as_str(),
                entry.message
            );
        }
        self.entries.push(entry);
    }
}
