use tracing::info;

/// Wall-clock timing for one storm computation.
/// Browsers have no monotonic `Instant`, so wasm32 reads `Date.now()`.
pub(crate) struct PerfTimer {
    task: &'static str,
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start(task: &'static str) -> Self {
        PerfTimer {
            task,
            #[cfg(target_arch = "wasm32")]
            start_ms: js_sys::Date::now(),
            #[cfg(not(target_arch = "wasm32"))]
            start: std::time::Instant::now(),
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.start_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }

    /// Logs how long the task took, passing its outcome through
    pub(crate) fn finish<T, E>(self, outcome: Result<T, E>) -> Result<T, E> {
        info!(task = self.task, ok = outcome.is_ok(), elapsed_ms = self.elapsed_ms(), "storm task finished");
        outcome
    }
}
