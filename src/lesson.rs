use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonRecord {
    #[serde(default)]
    pub lesson_number: Option<u64>,
    pub title: String,
    pub href: String,
    #[serde(default)]
    pub search_key: Option<String>,
}

impl LessonRecord {
    /// Ordering key; a missing number sorts as 0.
    pub fn sort_key(&self) -> u64 {
        self.lesson_number.unwrap_or(0)
    }

    /// Text the number branch of a search is matched against.
    ///
    /// Empty for a missing or zero number, so such rows can only be found by
    /// their search key.
    pub fn number_text(&self) -> String {
        match self.lesson_number {
            Some(n) if n != 0 => n.to_string(),
            _ => String::new(),
        }
    }

    pub fn search_key(&self) -> &str {
        self.search_key.as_deref().unwrap_or("")
    }
}
