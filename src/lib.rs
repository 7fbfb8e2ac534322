pub mod capture;
pub mod duration;
pub mod error;
pub mod fs;
pub mod http;
pub mod logger;
pub mod mime;

// Re-export commonly used types
pub use capture::{CaptureSummary, StopReason, StreamCapture};
pub use error::{CaptureError, Result};
pub use logger::{CaptureLogger, TracingLogger};
pub use mime::{ExtensionLookup, MimeTable};
