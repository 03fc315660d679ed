use serde::Serialize;
use std::fmt;

/// Classification outcome for a single message. The set is closed and a
/// record's category never changes after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Complaint,
    Request,
    Feedback,
    #[serde(rename = "General Inquiry")]
    GeneralInquiry,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Complaint => "Complaint",
            Category::Request => "Request",
            Category::Feedback => "Feedback",
            Category::GeneralInquiry => "General Inquiry",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One accepted message. Immutable once built; serializes to one CSV row.
#[derive(Debug, Clone, Serialize)]
pub struct MessageRecord {
    #[serde(rename = "Original Message")]
    pub original: String,
    #[serde(rename = "Cleaned Message")]
    pub normalized: String,
    #[serde(rename = "Category")]
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStat {
    pub category: Category,
    pub count: usize,
    pub percent: f64,
}

/// End-of-session statistics. Categories keep the order in which they
/// first appeared during the session.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub total: usize,
    pub per_category: Vec<CategoryStat>,
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📊 Summary Statistics:")?;
        writeln!(f, "-------------------")?;
        write!(f, "Total Messages: {}", self.total)?;
        for stat in &self.per_category {
            write!(
                f,
                "\n- {}: {} ({:.1}%)",
                stat.category, stat.count, stat.percent
            )?;
        }
        Ok(())
    }
}

/// Output of the summarize stage, consumed by persist.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub summary: SessionSummary,
    pub csv_output: String,
}
