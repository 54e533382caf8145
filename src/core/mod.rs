pub mod buffer;
pub mod service;

pub use crate::domain::model::{CopyReport, Invocation};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
