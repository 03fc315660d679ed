pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ticket-triage")]
#[command(about = "Classifies customer messages and tallies per-session statistics")]
pub struct TriageConfig {
    /// Directory the session artifact is written into
    #[arg(long, default_value = ".")]
    pub output_path: String,

    /// File name of the session artifact
    #[arg(long, default_value = "classified_messages.csv")]
    pub output_file: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for TriageConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for TriageConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("output_file", &self.output_file)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TriageConfig {
        TriageConfig {
            output_path: ".".to_string(),
            output_file: "classified_messages.csv".to_string(),
            verbose: false,
        }
    }

    #[test]
    fn default_shape_passes_validation() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn rejects_empty_output_file() {
        let mut bad = config();
        bad.output_file = "   ".to_string();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn rejects_empty_output_path() {
        let mut bad = config();
        bad.output_path = String::new();
        assert!(bad.validate().is_err());
    }
}
