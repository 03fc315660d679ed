/// Strips ASCII punctuation and lowercases the rest. Word boundaries are
/// taken by whitespace splitting after this pass, not before.
pub fn normalize(message: &str) -> String {
    message
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .flat_map(char::to_lowercase)
        .collect()
}
