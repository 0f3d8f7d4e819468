use crate::lesson::LessonRecord;

/// Lowercase and trim; absent input becomes the empty string.
///
/// A byte order mark counts as whitespace at either end.
pub fn normalize(raw: Option<&str>) -> String {
    raw.unwrap_or("")
        .to_lowercase()
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_string()
}

/// Whether `item` should be listed for the raw query text.
///
/// A query like "83" or "lesson 83" hits through the lesson number; "john 17"
/// also hits through the search key. The number branch is only taken when the
/// query has at least one digit.
pub fn matches(item: &LessonRecord, query: &str) -> bool {
    let q = normalize(Some(query));
    if q.is_empty() {
        return true;
    }

    let number_text = item.number_text();
    let scripture = normalize(item.search_key.as_deref());
    let digits: String = q.chars().filter(char::is_ascii_digit).collect();
    let has_digit = q.chars().any(|c| c.is_ascii_digit());

    (number_text.contains(digits.as_str()) && has_digit) || scripture.contains(q.as_str())
}

/// Ascending by lesson number. Stable, so ties keep their catalog order.
pub fn sort_catalog(items: &mut [LessonRecord]) {
    items.sort_by_key(LessonRecord::sort_key);
}

pub fn filter<'a>(items: &'a [LessonRecord], query: &str) -> Vec<&'a LessonRecord> {
    items.iter().filter(|it| matches(it, query)).collect()
}
