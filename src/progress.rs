// src/progress.rs
/// Lightweight progress reporting used by batch parsing.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of pages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One page parsed; `idx` is its position in the input list.
    fn item_done(&mut self, _idx: usize, _name: &str) {}

    /// One page could not be read or parsed.
    fn item_failed(&mut self, _idx: usize, _name: &str, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
