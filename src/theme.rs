use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

/// Storage key holding the persisted theme.
pub const THEME_KEY: &str = "lm_theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Only the exact strings "light" and "dark" are recognized.
    pub fn parse_stored(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The toggle always offers the other mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark mode",
            Theme::Dark => "Light mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistent string key-value store.
pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A JSON object on disk, rewritten in full on every `set_item`.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    /// Opens `path`; a missing file starts empty, an unreadable one is logged and ignored.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = match read_items(&path) {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %format!("{err:#}"), "ignoring unreadable storage file");
                BTreeMap::new()
            }
        };
        Self { path, items }
    }
}

fn read_items(path: &Path) -> anyhow::Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
        }
        let json = serde_json::to_vec_pretty(&self.items).context("serialize storage")?;
        std::fs::write(&self.path, json).with_context(|| format!("write {}", self.path.display()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleControl {
    pub pressed: bool,
    pub label: String,
}

/// The page surface the browser drives: root theme attribute, query field,
/// results container and the optional theme toggle.
///
/// `catalog_html` holds every row of the loaded catalog so the page can
/// re-filter in place as the query changes.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub theme: Option<Theme>,
    pub query: String,
    pub results_html: String,
    pub catalog_html: String,
    pub toggle: Option<ToggleControl>,
}

impl Document {
    /// A document with a theme toggle present.
    pub fn with_toggle() -> Self {
        Self {
            toggle: Some(ToggleControl {
                pressed: false,
                label: Theme::Light.toggle_label().to_string(),
            }),
            ..Self::default()
        }
    }

    /// The theme currently painted; an unset attribute reads as light.
    pub fn rendered_theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }
}

pub struct ThemeStore<S> {
    storage: S,
}

impl<S: Storage> ThemeStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn apply(&mut self, doc: &mut Document, theme: Theme) {
        doc.theme = Some(theme);
        if let Err(err) = self.storage.set_item(THEME_KEY, theme.as_str()) {
            tracing::warn!(%theme, error = %format!("{err:#}"), "failed to persist theme");
        }
        if let Some(toggle) = doc.toggle.as_mut() {
            toggle.pressed = theme == Theme::Dark;
            toggle.label = theme.toggle_label().to_string();
        }
    }

    pub fn initialize(&mut self, doc: &mut Document) -> Theme {
        let theme = self
            .storage
            .get_item(THEME_KEY)
            .as_deref()
            .and_then(Theme::parse_stored)
            .unwrap_or_default();
        self.apply(doc, theme);
        theme
    }

    /// Flips whatever the document currently shows, not the stored value.
    pub fn toggle(&mut self, doc: &mut Document) -> Theme {
        let next = doc.rendered_theme().inverse();
        self.apply(doc, next);
        next
    }
}
