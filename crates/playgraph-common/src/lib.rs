//! Common utilities and types for the playgraph workspace

pub mod error;
pub mod logging;
pub mod macros;
pub mod types;

// Re-export commonly used types
pub use error::{PlayGraphError, Result};
pub use logging::{init_default_logging, init_logging, LoggingConfig};
pub use types::*;
