use crate::domain::model::Category;

/// Priority-ordered keyword table, fixed for the process lifetime. The
/// first category with any substring hit wins, so the order here is part
/// of the contract.
pub const KEYWORD_TABLE: &[(Category, &[&str])] = &[
    (Category::Complaint, &["error", "failed", "problem"]),
    (Category::Request, &["please", "help", "support"]),
    (Category::Feedback, &["thanks", "great", "awesome"]),
];

/// Assigns a category to a normalized message. Matching is plain substring
/// containment, not token-boundary-aware. Total over all strings; an empty
/// message falls through to `GeneralInquiry`.
pub fn classify(normalized: &str) -> Category {
    for (category, keywords) in KEYWORD_TABLE {
        if keywords.iter().any(|keyword| normalized.contains(keyword)) {
            return *category;
        }
    }
    Category::GeneralInquiry
}
