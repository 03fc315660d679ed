pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, TriageConfig};
pub use crate::core::engine::SessionEngine;
pub use crate::core::input::{ReplaySource, StdinSource};
pub use crate::core::pipeline::TriagePipeline;
pub use crate::utils::error::{Result, TriageError};
