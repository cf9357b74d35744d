// crates/xeghep-core/src/autoplay.rs
// Cancellable repeating task driving carousel auto-advance

/// Source of repeating timers.
///
/// Dropping a returned handle must cancel its timer. The DOM build backs
/// this with `gloo_timers::callback::Interval`.
pub trait Ticker {
    type Handle;

    /// Start a timer firing every `period_ms` until the handle is dropped
    fn every(&mut self, period_ms: u32) -> Self::Handle;
}

/// Owns at most one live timer handle.
///
/// `start` drops the previous handle before creating the next one, so two
/// timers can never be live at the same time.
pub struct AutoAdvance<T: Ticker> {
    ticker: T,
    period_ms: u32,
    handle: Option<T::Handle>,
}

impl<T: Ticker> AutoAdvance<T> {
    pub fn new(ticker: T, period_ms: u32) -> Self {
        Self {
            ticker,
            period_ms,
            handle: None,
        }
    }

    /// (Re)start the timer from a full period
    pub fn start(&mut self) {
        self.stop();
        self.handle = Some(self.ticker.every(self.period_ms));
        log::trace!("Auto-advance started ({}ms)", self.period_ms);
    }

    pub fn stop(&mut self) {
        if self.handle.take().is_some() {
            log::trace!("Auto-advance stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }
}

impl<T: Ticker> std::fmt::Debug for AutoAdvance<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoAdvance")
            .field("period_ms", &self.period_ms)
            .field("running", &self.is_running())
            .finish()
    }
}
