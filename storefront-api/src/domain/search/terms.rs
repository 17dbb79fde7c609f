/// Splits a keyword into independently searched terms.
///
/// Terms are separated by whitespace or commas. If splitting leaves nothing
/// the trimmed keyword itself is the only term, unless it is empty too.
pub fn split_terms(keyword: &str) -> Vec<String> {
    let terms: Vec<String> = keyword
        .split(|c: char| c.is_whitespace() || c == ',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect();

    if !terms.is_empty() {
        return terms;
    }

    let trimmed = keyword.trim();
    if trimmed.is_empty() {
        vec![]
    } else {
        vec![trimmed.to_string()]
    }
}
