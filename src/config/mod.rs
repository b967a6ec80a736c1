//! Configuration management.
//!
//! Application settings persist under an XDG config directory; pipeline
//! parameters are threaded explicitly into the driver.

mod pipeline;
mod settings;

pub use pipeline::PipelineConfig;
pub use settings::{AppSettings, Paths};
