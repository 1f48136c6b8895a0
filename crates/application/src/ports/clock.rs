use chrono::{DateTime, Local};
use std::time::Instant;

pub trait Clock: Send + Sync {
    /// Wall-clock time in the server's local timezone.
    fn local_now(&self) -> DateTime<Local>;

    /// Monotonic time, used for cache ageing.
    fn instant(&self) -> Instant;
}
