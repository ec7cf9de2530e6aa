use std::time::{Duration, Instant};

/// Runs `f` and returns its result with the monotonic wall-clock time it took.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}
