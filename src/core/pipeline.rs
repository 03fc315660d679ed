use crate::core::classifier::classify;
use crate::core::frequency::WordFrequencies;
use crate::core::input::next_message;
use crate::core::normalizer::normalize;
use crate::core::session::{self, SessionLog};
use crate::core::{ConfigProvider, MessageRecord, MessageSource, Pipeline, SessionReport, Storage};
use crate::utils::error::{Result, TriageError};

const CSV_HEADER: [&str; 3] = ["Original Message", "Cleaned Message", "Category"];

pub struct TriagePipeline<S: MessageSource, St: Storage, C: ConfigProvider> {
    source: S,
    storage: St,
    config: C,
}

impl<S: MessageSource, St: Storage, C: ConfigProvider> TriagePipeline<S, St, C> {
    pub fn new(source: S, storage: St, config: C) -> Self {
        Self {
            source,
            storage,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<S: MessageSource, St: Storage, C: ConfigProvider> Pipeline for TriagePipeline<S, St, C> {
    async fn collect(&mut self) -> Result<Vec<MessageRecord>> {
        let mut log = SessionLog::new();

        while let Some(original) = next_message(&mut self.source).await? {
            let normalized = normalize(&original);
            let category = classify(&normalized);
            let frequencies = WordFrequencies::of(&normalized);

            tracing::debug!("message #{} classified as {}", log.len() + 1, category);

            println!();
            println!("Original: {}", original);
            println!("Cleaned: {}", normalized);
            println!("Category: {}", category);
            println!("Word Frequencies: {}", frequencies);
            println!("{}", "-".repeat(30));

            log.push(MessageRecord {
                original,
                normalized,
                category,
            });
        }

        tracing::debug!("input closed after {} message(s)", log.len());
        Ok(log.into_records())
    }

    async fn summarize(&self, records: &[MessageRecord]) -> Result<SessionReport> {
        let summary = session::summarize(records);

        let mut buf = Vec::new();
        {
            let mut writer = csv::Writer::from_writer(&mut buf);
            if records.is_empty() {
                // serialize() only emits the header alongside a first row,
                // so an empty session writes it explicitly
                writer.write_record(CSV_HEADER)?;
            }
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
        let csv_output = String::from_utf8(buf).map_err(|e| TriageError::ProcessingError {
            message: format!("CSV output was not valid UTF-8: {}", e),
        })?;

        Ok(SessionReport {
            summary,
            csv_output,
        })
    }

    async fn persist(&self, report: SessionReport) -> Result<String> {
        let output_path = format!(
            "{}/{}",
            self.config.output_path(),
            self.config.output_file()
        );

        tracing::debug!(
            "writing {} bytes to {}",
            report.csv_output.len(),
            output_path
        );
        self.storage
            .write_file(self.config.output_file(), report.csv_output.as_bytes())
            .await?;

        Ok(output_path)
    }
}
