use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct SessionEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SessionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs one full session: interactive collection, summary statistics,
    /// then the one-shot write-out. Returns the output path.
    pub async fn run(&mut self) -> Result<String> {
        let records = self.pipeline.collect().await?;

        let report = self.pipeline.summarize(&records).await?;
        println!();
        println!("{}", report.summary);

        let output_path = self.pipeline.persist(report).await?;
        Ok(output_path)
    }
}
