use crate::domain::model::{Category, CategoryStat, MessageRecord, SessionSummary};
use std::collections::HashMap;

/// In-memory accumulator for one session. Owns every accepted record;
/// nothing survives between runs.
#[derive(Debug, Default)]
pub struct SessionLog {
    records: Vec<MessageRecord>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MessageRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<MessageRecord> {
        self.records
    }
}

/// Derives the end-of-session statistics. Categories are reported in the
/// order they first occurred, not sorted or in priority order.
pub fn summarize(records: &[MessageRecord]) -> SessionSummary {
    let mut counts: HashMap<Category, usize> = HashMap::new();
    let mut order: Vec<Category> = Vec::new();
    for record in records {
        if !counts.contains_key(&record.category) {
            order.push(record.category);
        }
        *counts.entry(record.category).or_insert(0) += 1;
    }

    let total = records.len();
    let per_category = order
        .into_iter()
        .map(|category| {
            let count = counts[&category];
            CategoryStat {
                category,
                count,
                percent: percent(count, total),
            }
        })
        .collect();

    SessionSummary { total, per_category }
}

/// count/total as a percentage rounded to one decimal; 0 when total is 0.
fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = (count as f64 / total as f64) * 100.0;
    (raw * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(original: &str, category: Category) -> MessageRecord {
        MessageRecord {
            original: original.to_string(),
            normalized: original.to_lowercase(),
            category,
        }
    }

    #[test]
    fn splits_percentages_evenly() {
        let records = vec![
            record("order failed", Category::Complaint),
            record("thanks", Category::Feedback),
            record("another error", Category::Complaint),
            record("great stuff", Category::Feedback),
        ];
        let summary = summarize(&records);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.per_category.len(), 2);
        assert_eq!(summary.per_category[0].category, Category::Complaint);
        assert_eq!(summary.per_category[0].count, 2);
        assert_eq!(summary.per_category[0].percent, 50.0);
        assert_eq!(summary.per_category[1].category, Category::Feedback);
        assert_eq!(summary.per_category[1].percent, 50.0);
    }

    #[test]
    fn categories_keep_first_occurrence_order() {
        let records = vec![
            record("thanks", Category::Feedback),
            record("order failed", Category::Complaint),
            record("still broken", Category::Complaint),
        ];
        let summary = summarize(&records);

        let order: Vec<Category> = summary
            .per_category
            .iter()
            .map(|stat| stat.category)
            .collect();
        assert_eq!(order, vec![Category::Feedback, Category::Complaint]);
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let records = vec![
            record("a error", Category::Complaint),
            record("b", Category::GeneralInquiry),
            record("c", Category::GeneralInquiry),
        ];
        let summary = summarize(&records);
        let sum: f64 = summary.per_category.iter().map(|stat| stat.percent).sum();
        assert!((sum - 100.0).abs() < 0.2, "sum was {}", sum);
    }

    #[test]
    fn empty_session_reports_zero_without_dividing() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.per_category.is_empty());
    }

    #[test]
    fn summary_display_matches_report_format() {
        let records = vec![
            record("order failed", Category::Complaint),
            record("thanks", Category::Feedback),
        ];
        let rendered = summarize(&records).to_string();

        assert!(rendered.contains("Total Messages: 2"));
        assert!(rendered.contains("- Complaint: 1 (50.0%)"));
        assert!(rendered.contains("- Feedback: 1 (50.0%)"));
    }
}
