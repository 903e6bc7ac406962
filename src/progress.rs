// src/progress.rs
/// Lightweight progress reporting used by long-running operations (scrape/export).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of pages (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One Major Group page was scraped.
    fn item_done(&mut self, _id: u32, _label: &str) {}

    /// One Major Group page failed; the run continues.
    fn item_failed(&mut self, _id: u32, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Prints progress lines to stderr (CLI).
pub struct StderrProgress {
    done: usize,
    total: usize,
}

impl StderrProgress {
    pub fn new() -> Self {
        Self { done: 0, total: 0 }
    }
}

impl Default for StderrProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, _id: u32, label: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {label}", self.done, self.total);
    }
    fn item_failed(&mut self, id: u32, msg: &str) {
        self.done += 1;
        eprintln!("[{}/{}] Major Group id {id} failed: {msg}", self.done, self.total);
    }
}
