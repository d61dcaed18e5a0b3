//! Keep track of time, both in native and web platforms.

pub use std::time::Duration;
pub use web_time::Instant;
