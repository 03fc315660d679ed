use crate::domain::ports::MessageSource;
use crate::utils::error::Result;
use std::collections::VecDeque;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

pub const PROMPT: &str = "Enter your message (or 'quit' to exit): ";

const SENTINELS: [&str; 2] = ["quit", "exit"];

pub fn is_sentinel(message: &str) -> bool {
    let lowered = message.to_lowercase();
    SENTINELS.contains(&lowered.as_str())
}

fn is_all_numeric(message: &str) -> bool {
    !message.is_empty() && message.chars().all(|c| c.is_ascii_digit())
}

/// Reads from the source until an acceptable message arrives. Empty lines
/// get an advisory and another prompt; all-numeric lines get a warning but
/// pass through. Returns `None` once a sentinel is read or the source is
/// exhausted, so the session can never spin on a closed input.
pub async fn next_message<S: MessageSource>(source: &mut S) -> Result<Option<String>> {
    loop {
        let line = match source.next_line(PROMPT).await {
            Ok(Some(line)) => line,
            Ok(None) => return Ok(None),
            Err(e) => {
                tracing::warn!("input source failed, ending session: {}", e);
                return Ok(None);
            }
        };

        let message = line.trim();
        if message.is_empty() {
            println!("Invalid input: message cannot be empty. Please try again.");
            continue;
        }
        if is_sentinel(message) {
            return Ok(None);
        }
        if is_all_numeric(message) {
            println!("Warning: message contains only numbers. Did you mean to text?");
        }
        return Ok(Some(message.to_string()));
    }
}

/// Interactive stdin adapter. Prints the prompt before each blocking read.
pub struct StdinSource {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinSource {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageSource for StdinSource {
    async fn next_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{}", prompt);
        std::io::stdout().flush()?;
        Ok(self.lines.next_line().await?)
    }
}

/// Replays a fixed list of lines. Used by tests and scripted runs; the
/// prompt is ignored.
#[derive(Debug, Clone, Default)]
pub struct ReplaySource {
    lines: VecDeque<String>,
}

impl ReplaySource {
    pub fn new<I, T>(lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl MessageSource for ReplaySource {
    async fn next_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_are_case_insensitive() {
        assert!(is_sentinel("quit"));
        assert!(is_sentinel("QUIT"));
        assert!(is_sentinel("Exit"));
        assert!(!is_sentinel("quit please"));
        assert!(!is_sentinel("exiting"));
    }

    #[test]
    fn numeric_detection() {
        assert!(is_all_numeric("12345"));
        assert!(!is_all_numeric("12a45"));
        assert!(!is_all_numeric(""));
    }

    #[tokio::test]
    async fn skips_empty_lines_and_stops_at_sentinel() {
        let mut source = ReplaySource::new(["   ", "", "hello there", " QUIT "]);
        assert_eq!(
            next_message(&mut source).await.unwrap(),
            Some("hello there".to_string())
        );
        assert_eq!(next_message(&mut source).await.unwrap(), None);
    }

    #[tokio::test]
    async fn trims_surrounding_whitespace() {
        let mut source = ReplaySource::new(["  thanks a lot  "]);
        assert_eq!(
            next_message(&mut source).await.unwrap(),
            Some("thanks a lot".to_string())
        );
    }

    #[tokio::test]
    async fn exhausted_source_acts_as_sentinel() {
        let mut source = ReplaySource::new(Vec::<String>::new());
        assert_eq!(next_message(&mut source).await.unwrap(), None);
    }

    #[tokio::test]
    async fn all_numeric_input_is_still_accepted() {
        let mut source = ReplaySource::new(["12345"]);
        assert_eq!(
            next_message(&mut source).await.unwrap(),
            Some("12345".to_string())
        );
    }
}
