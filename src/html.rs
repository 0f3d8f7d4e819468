use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::builtin;
use crate::lesson::LessonRecord;
use crate::theme::Document;

pub const PAGE_TITLE: &str = "Lesson Library";

pub fn render_row(item: &LessonRecord) -> Markup {
    let number = item
        .lesson_number
        .map(|n| n.to_string())
        .unwrap_or_default();

    html! {
        div class="row" data-number=(item.number_text()) data-key=(item.search_key()) {
            a class="row-link" href=(item.href) {
                span class="row-title" { (number) " — " (item.title) }
            }
            div class="row-meta" { (item.search_key()) }
        }
    }
}

/// Markup for the results container: one row per item, or the placeholder.
pub fn render_results(items: &[&LessonRecord]) -> String {
    let markup = html! {
        @if items.is_empty() {
            p class="muted small" style="padding:12px 0;" { "No matches found." }
        } @else {
            @for item in items {
                (render_row(item))
            }
        }
    };
    markup.into_string()
}

/// Every row of the catalog, unfiltered.
pub fn render_catalog(items: &[LessonRecord]) -> String {
    let markup = html! {
        @for item in items {
            (render_row(item))
        }
    };
    markup.into_string()
}

pub fn render_load_failure(file_name: &str) -> String {
    let markup = html! {
        p class="muted small" {
            "Library failed to load. Check that "
            strong { (file_name) }
            " exists in the same folder as index.html."
        }
    };
    markup.into_string()
}

pub fn build_page(doc: &Document) -> String {
    let theme = doc.rendered_theme();
    let markup: Markup = html! {
        (DOCTYPE)
        html lang="en" data-theme=(theme.as_str()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="light dark";
                title { (PAGE_TITLE) }
                style { (PreEscaped(builtin::BUILTIN_CSS)) }
            }
            body {
                div class="wrap" {
                    header class="topbar" {
                        h1 { (PAGE_TITLE) }
                        @if let Some(toggle) = &doc.toggle {
                            button type="button" id="themeToggle" class="btn"
                                aria-pressed=(toggle.pressed.to_string()) { (toggle.label) }
                        }
                    }
                    input id="q" type="search" autocomplete="off"
                        placeholder="Lesson number or scripture (e.g. 83, john 17)"
                        value=(doc.query);
                    div id="results" {
                        (PreEscaped(&doc.results_html))
                    }
                    @if !doc.catalog_html.is_empty() {
                        template id="catalog" {
                            (PreEscaped(&doc.catalog_html))
                        }
                    }
                }
                script { (PreEscaped(builtin::THEME_TOGGLE_JS)) }
                script { (PreEscaped(builtin::SEARCH_JS)) }
            }
        }
    };
    markup.into_string()
}
