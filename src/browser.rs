use crate::error::LoadError;
use crate::html;
use crate::lesson::LessonRecord;
use crate::search;
use crate::theme::{Document, Storage, Theme, ThemeStore};

/// Page controller: owns the theme store, the document it paints and the
/// catalog once loaded.
pub struct LessonBrowser<S> {
    themes: ThemeStore<S>,
    document: Document,
    catalog: Vec<LessonRecord>,
}

impl<S: Storage> LessonBrowser<S> {
    /// Applies the stored theme before anything else is rendered.
    pub fn start(storage: S) -> Self {
        let mut themes = ThemeStore::new(storage);
        let mut document = Document::with_toggle();
        themes.initialize(&mut document);
        Self {
            themes,
            document,
            catalog: Vec::new(),
        }
    }

    /// Takes ownership of the loaded catalog, sorts it once and renders the
    /// unfiltered view.
    pub fn attach_catalog(&mut self, mut items: Vec<LessonRecord>) {
        search::sort_catalog(&mut items);
        self.catalog = items;
        self.document.catalog_html = html::render_catalog(&self.catalog);
        self.on_query_changed("");
    }

    pub fn catalog_failed(&mut self, err: &LoadError) {
        tracing::error!(error = %err, "catalog failed to load");
        self.catalog.clear();
        self.document.catalog_html.clear();
        self.document.results_html = html::render_load_failure(&catalog_file_name(err.location()));
    }

    pub fn on_query_changed(&mut self, raw: &str) {
        raw.clone_into(&mut self.document.query);
        let filtered = search::filter(&self.catalog, raw);
        self.document.results_html = html::render_results(&filtered);
    }

    pub fn on_toggle_pressed(&mut self) -> Theme {
        self.themes.toggle(&mut self.document)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn catalog(&self) -> &[LessonRecord] {
        &self.catalog
    }

    pub fn storage(&self) -> &S {
        self.themes.storage()
    }
}

/// Last path segment of a catalog location, for the failure message.
fn catalog_file_name(location: &str) -> String {
    let trimmed = location.split(['?', '#']).next().unwrap_or("");
    trimmed
        .rsplit(|c: char| c == '/' || c == '\\')
        .find(|s| !s.is_empty())
        .unwrap_or(crate::loader::DEFAULT_CATALOG)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{MemoryStorage, THEME_KEY};

    fn lesson(n: u64, title: &str, key: &str) -> LessonRecord {
        LessonRecord {
            lesson_number: Some(n),
            title: title.to_string(),
            href: format!("l{n}.html"),
            search_key: Some(key.to_string()),
        }
    }

    #[test]
    fn start_applies_light_theme() {
        let browser = LessonBrowser::start(MemoryStorage::new());
        let doc = browser.document();
        assert_eq!(doc.theme, Some(Theme::Light));
        assert_eq!(doc.toggle.as_ref().unwrap().label, "Dark mode");
        assert_eq!(
            browser.storage().get_item(THEME_KEY).as_deref(),
            Some("light")
        );
    }

    #[test]
    fn attach_sorts_and_renders_everything() {
        let mut browser = LessonBrowser::start(MemoryStorage::new());
        browser.attach_catalog(vec![
            lesson(83, "Prayer", "Acts 1"),
            lesson(1, "Intro", "Genesis 1"),
            lesson(17, "Faith", "John 17"),
        ]);
        let numbers: Vec<_> = browser
            .catalog()
            .iter()
            .map(LessonRecord::sort_key)
            .collect();
        assert_eq!(numbers, vec![1, 17, 83]);

        let results = &browser.document().results_html;
        assert_eq!(results.matches("class=\"row\"").count(), 3);
        let (i, f, p) = (
            results.find("Intro").unwrap(),
            results.find("Faith").unwrap(),
            results.find("Prayer").unwrap(),
        );
        assert!(i < f && f < p);
        assert_eq!(
            browser.document().catalog_html.matches("class=\"row\"").count(),
            3
        );
    }

    #[test]
    fn query_changes_rerender() {
        let mut browser = LessonBrowser::start(MemoryStorage::new());
        browser.attach_catalog(vec![lesson(17, "Faith", "John 17"), lesson(1, "Intro", "Genesis 1")]);

        browser.on_query_changed("john");
        assert_eq!(browser.document().query, "john");
        assert!(browser.document().results_html.contains("Faith"));
        assert!(!browser.document().results_html.contains("Intro"));

        browser.on_query_changed("psalm");
        assert!(browser.document().results_html.contains("No matches found."));
        // The in-page copy of the catalog is independent of the query.
        assert_eq!(
            browser.document().catalog_html.matches("class=\"row\"").count(),
            2
        );

        browser.on_query_changed("");
        assert_eq!(
            browser.document().results_html.matches("class=\"row\"").count(),
            2
        );
    }

    #[test]
    fn empty_catalog_shows_placeholder() {
        let mut browser = LessonBrowser::start(MemoryStorage::new());
        browser.attach_catalog(Vec::new());
        assert!(browser.document().results_html.contains("No matches found."));
    }

    #[test]
    fn failure_replaces_results() {
        let mut browser = LessonBrowser::start(MemoryStorage::new());
        browser.attach_catalog(vec![lesson(1, "Intro", "Genesis 1")]);
        let err = LoadError::MissingCatalog {
            location: "http://localhost/site/library.json".to_string(),
            reason: "status 404 Not Found".to_string(),
        };
        browser.catalog_failed(&err);
        let results = &browser.document().results_html;
        assert!(results.contains("Library failed to load."));
        assert!(results.contains("<strong>library.json</strong>"));
        assert!(browser.document().catalog_html.is_empty());
    }

    #[test]
    fn toggle_twice_round_trips() {
        let mut browser = LessonBrowser::start(MemoryStorage::new());
        assert_eq!(browser.on_toggle_pressed(), Theme::Dark);
        assert!(browser.document().toggle.as_ref().unwrap().pressed);
        assert_eq!(browser.on_toggle_pressed(), Theme::Light);
        assert_eq!(browser.document().theme, Some(Theme::Light));
    }

    #[test]
    fn file_names_from_locations() {
        assert_eq!(catalog_file_name("library.json"), "library.json");
        assert_eq!(catalog_file_name("data/lessons.json"), "lessons.json");
        assert_eq!(
            catalog_file_name("https://example.com/a/library.json?v=2"),
            "library.json"
        );
        assert_eq!(catalog_file_name(""), "library.json");
    }
}
