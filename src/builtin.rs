pub const BUILTIN_CSS: &str = include_str!("builtin.css");

pub const THEME_TOGGLE_JS: &str = r#"(function () {
  var storageKey = "lm_theme";
  var root = document.documentElement;
  var button = document.getElementById("themeToggle");

  function apply(theme) {
    root.setAttribute("data-theme", theme);
    try {
      localStorage.setItem(storageKey, theme);
    } catch (_) {}
    if (!button) return;
    var isDark = theme === "dark";
    button.setAttribute("aria-pressed", String(isDark));
    button.textContent = isDark ? "Light mode" : "Dark mode";
  }

  var saved = null;
  try {
    saved = localStorage.getItem(storageKey);
  } catch (_) {
    saved = null;
  }
  if (saved === "dark" || saved === "light") {
    apply(saved);
  } else {
    apply(root.getAttribute("data-theme") || "light");
  }

  if (button) {
    button.addEventListener("click", function () {
      var current = root.getAttribute("data-theme") || "light";
      apply(current === "dark" ? "light" : "dark");
    });
  }
})();"#;

/// Re-filters the rows kept in `template#catalog` into `#results` on every
/// input event of `#q`, with the same matching rules as `search::matches`.
pub const SEARCH_JS: &str = r#"(function () {
  var q = document.getElementById("q");
  var results = document.getElementById("results");
  var catalog = document.getElementById("catalog");
  if (!q || !results || !catalog) return;

  var noMatches = '<p class="muted small" style="padding:12px 0;">No matches found.</p>';
  var rows = Array.prototype.slice.call(catalog.content.querySelectorAll(".row"));

  function norm(s) {
    return (s || "").toLowerCase().trim();
  }

  function matches(row, query) {
    var needle = norm(query);
    if (!needle) return true;
    var numberText = row.getAttribute("data-number") || "";
    var scripture = norm(row.getAttribute("data-key"));
    return (
      numberText.includes(needle.replace(/[^\d]/g, "")) && /\d/.test(needle) ||
      scripture.includes(needle)
    );
  }

  function update() {
    var filtered = rows.filter(function (row) {
      return matches(row, q.value);
    });
    results.innerHTML = "";
    if (!filtered.length) {
      results.innerHTML = noMatches;
      return;
    }
    filtered.forEach(function (row) {
      results.appendChild(row.cloneNode(true));
    });
  }

  q.addEventListener("input", update);
  update();
})();"#;
