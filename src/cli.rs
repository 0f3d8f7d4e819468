use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::loader::{CatalogSource, DEFAULT_CATALOG};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Mode {
    /// A complete HTML page.
    Page,
    /// Only the markup of the results container.
    Fragment,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProgressMode {
    /// Enable progress UI when stderr is a TTY.
    Auto,
    /// Always enable progress UI (even when piped).
    Always,
    /// Never show progress UI.
    Never,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Lesson catalog: a local JSON file or an `http(s)://` URL.
    #[arg(long, default_value = DEFAULT_CATALOG)]
    pub catalog: CatalogSource,

    /// Filter text: a lesson number or a scripture reference (e.g. `83`, `john 17`).
    #[arg(long, default_value = "")]
    pub query: String,

    /// Key-value file holding the persisted theme preference.
    #[arg(long, default_value = ".lesson-browser/storage.json")]
    pub storage: PathBuf,

    /// Press the theme toggle once before rendering.
    #[arg(long)]
    pub toggle_theme: bool,

    /// Output mode: `page` (full HTML document) or `fragment` (results markup only).
    #[arg(long, value_enum, default_value = "page")]
    pub mode: Mode,

    /// Output file. Writes to stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// HTTP User-Agent used for fetching a remote catalog.
    #[arg(long, default_value = "lesson-browser/0.1")]
    pub user_agent: String,

    /// Progress display: `auto`, `always`, or `never`.
    #[arg(long, value_enum, default_value = "auto")]
    pub progress: ProgressMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_read_the_bundled_catalog() {
        let args = Args::try_parse_from(["lesson-browser"]).unwrap();
        assert_eq!(
            args.catalog,
            CatalogSource::Local(PathBuf::from(DEFAULT_CATALOG))
        );
        assert_eq!(args.query, "");
        assert!(matches!(args.mode, Mode::Page));
    }
}
