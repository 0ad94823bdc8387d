use std::cell::Cell;

/// Source of wall-clock time for the history reducer
pub trait Clock {
    /// Milliseconds since the UNIX epoch
    fn now_ms(&self) -> u64;
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        current_time_ms()
    }
}

/// A clock that only moves when told to
#[derive(Debug, Default)]
pub struct FixedClock {
    now: Cell<u64>,
}

impl FixedClock {
    pub fn new(now_ms: u64) -> Self {
        Self { now: Cell::new(now_ms) }
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Get the current time in milliseconds since the UNIX epoch
#[cfg(not(target_arch = "wasm32"))]
pub fn current_time_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Get the current time in milliseconds since the UNIX epoch
#[cfg(target_arch = "wasm32")]
pub fn current_time_ms() -> u64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|perf| (perf.time_origin() + perf.now()) as u64)
        .unwrap_or(0)
}
