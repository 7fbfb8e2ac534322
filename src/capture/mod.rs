pub mod job;
pub mod naming;
pub mod types;

pub use job::StreamCapture;
pub use naming::{CaptureNaming, SENTINEL_EXTENSION};
pub use types::{CaptureSummary, StopReason};
