pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use config::ServiceConfig;
pub use core::{buffer::DisplayBuffer, service::NativeService};
pub use domain::model::{CopyReport, Invocation};
pub use utils::error::{Result, ServiceError};
