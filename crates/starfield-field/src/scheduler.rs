use std::cell::Cell;

/// Arranges for the frame loop to run again on the next display refresh.
pub trait Scheduler {
    fn request_tick(&self);
}

/// Scheduler that only counts requests. Used by the headless runner,
/// which drives ticks itself.
#[derive(Debug, Default)]
pub struct CountingScheduler {
    requests: Cell<u64>,
}

impl CountingScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> u64 {
        self.requests.get()
    }
}

impl Scheduler for CountingScheduler {
    fn request_tick(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}
