use crate::domain::model::{MessageRecord, SessionReport};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Yields one raw input line per call. `None` means the source is
/// exhausted and the session should wind down.
pub trait MessageSource: Send + Sync {
    fn next_line(
        &mut self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
    fn verbose(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send {
    async fn collect(&mut self) -> Result<Vec<MessageRecord>>;
    async fn summarize(&self, records: &[MessageRecord]) -> Result<SessionReport>;
    async fn persist(&self, report: SessionReport) -> Result<String>;
}
