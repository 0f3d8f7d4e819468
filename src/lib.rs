mod browser;
mod builtin;
mod cli;
mod error;
mod html;
mod lesson;
mod loader;
mod progress;
mod search;
mod theme;

use std::io::Write as _;
use std::path::Path;

use anyhow::Context as _;
use cli::Args;
use loader::CatalogLoader;

pub use browser::LessonBrowser;
pub use cli::ProgressMode;
pub use cli::{Args as CliArgs, Mode};
pub use error::LoadError;
pub use html::{build_page, render_catalog, render_load_failure, render_results, render_row};
pub use lesson::LessonRecord;
pub use loader::{CatalogSource, DEFAULT_CATALOG};
pub use search::{filter, matches, normalize, sort_catalog};
pub use theme::{
    Document, FileStorage, MemoryStorage, Storage, THEME_KEY, Theme, ThemeStore, ToggleControl,
};

pub async fn run(args: Args) -> anyhow::Result<()> {
    use std::io::IsTerminal as _;

    let progress_enabled = match args.progress {
        ProgressMode::Always => true,
        ProgressMode::Never => false,
        ProgressMode::Auto => std::io::stderr().is_terminal(),
    };
    let progress = progress::Progress::new(progress_enabled);

    progress.set_stage("applying theme");
    let mut browser = LessonBrowser::start(FileStorage::open(&args.storage));
    if args.toggle_theme {
        let theme = browser.on_toggle_pressed();
        tracing::info!(%theme, "theme toggled");
    }

    progress.set_stage(format!("loading {}", args.catalog.location()));
    let loader = CatalogLoader::new(&args.user_agent)?;
    let loaded = loader.load(&args.catalog).await;
    let failure = match loaded {
        Ok(items) => {
            browser.attach_catalog(items);
            browser.on_query_changed(&args.query);
            None
        }
        Err(err) => {
            browser.catalog_failed(&err);
            Some(err)
        }
    };

    progress.set_stage("writing output");
    let doc = browser.document();
    let output = match args.mode {
        Mode::Page => build_page(doc),
        Mode::Fragment => doc.results_html.clone(),
    };
    write_output(args.out.as_deref(), &output)?;
    progress.finish();

    match failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

fn write_output(out: Option<&Path>, output: &str) -> anyhow::Result<()> {
    let Some(path) = out else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(output.as_bytes()).context("write stdout")?;
        return stdout.flush().context("flush stdout");
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
    }
    std::fs::write(path, output).with_context(|| format!("write {}", path.display()))
}
