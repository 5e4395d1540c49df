//! Core traits defined in `frescipe-core` and implemented by other crates.

pub mod clock;
pub mod publisher;

pub use clock::{Clock, FixedClock, SystemClock};
pub use publisher::{EventPublisher, NoopPublisher};
