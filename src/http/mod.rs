pub mod client;
pub mod types;

// Re-export commonly used types for convenient access
pub use client::Client;
pub use types::ClientOptions;
