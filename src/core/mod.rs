pub mod classifier;
pub mod engine;
pub mod frequency;
pub mod input;
pub mod normalizer;
pub mod pipeline;
pub mod session;

pub use crate::domain::model::{Category, MessageRecord, SessionReport, SessionSummary};
pub use crate::domain::ports::{ConfigProvider, MessageSource, Pipeline, Storage};
pub use crate::utils::error::Result;
