//! Section title slugs, as GitBook uses them for URL path segments.

use std::sync::LazyLock;

use regex::Regex;

static AMPERSAND: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+&\s+").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_-]+").unwrap());
static DASH_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"--+").unwrap());

/// Turns a section title into a URL path segment.
///
/// Lowercases, spells out a spaced `&` as `and`, replaces whitespace with `-`,
/// drops everything outside `[a-z0-9_-]`, then collapses and trims dashes.
/// Any input yields a (possibly empty) slug, and slugs are fixed points.
///
/// # Examples
///
/// ```
/// # use summary_ltx::slugify;
/// assert_eq!(slugify("Getting Started"), "getting-started");
/// assert_eq!(slugify("Resources & Tools"), "resources-and-tools");
/// assert_eq!(slugify("  --Hello, World!--  "), "hello-world");
/// assert_eq!(slugify(""), "");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let anded = AMPERSAND.replace_all(&lowered, "-and-");
    let dashed = WHITESPACE.replace_all(&anded, "-");
    let cleaned = NON_WORD.replace_all(&dashed, "");
    let collapsed = DASH_RUN.replace_all(&cleaned, "-");
    collapsed.trim_start_matches('-').trim_end_matches('-').to_string()
}
