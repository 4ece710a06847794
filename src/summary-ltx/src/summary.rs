//! Parsing of GitBook `SUMMARY.md` files into sections of resolved links.
//!
//! Only two constructs are recognized, each on a line of its own:
//!
//! - `## Section title` opens a new section;
//! - `* [Page title](path/to/page.md)` adds a link to the open section.
//!
//! Every other line is ignored, so any markdown parses.

use std::sync::LazyLock;

use regex::Regex;

use crate::slug::slugify;
use crate::url_utils::resolve_link;

static SECTION_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^##\s+(.+)").unwrap());
static LINK_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*\s+\[(.+?)\]\((.+?)\)").unwrap());

/// Title of the section that collects links appearing before the first heading.
/// Sections with this title get no header in llms.txt.
pub const OVERVIEW_TITLE: &str = "Overview";

/// A single link of the index: a page title and its full URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    title: String,
    url: String,
}

impl Entry {
    pub fn new(title: String, url: String) -> Self {
        Self { title, url }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// A `## heading` of the summary and the links listed under it, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    title: String,
    items: Vec<Entry>,
}

impl Section {
    pub fn new(title: String) -> Self {
        Self {
            title,
            items: Vec::new(),
        }
    }

    /// Holder for links that appear before the first heading.
    fn overview() -> Self {
        Self::new(OVERVIEW_TITLE.to_string())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[Entry] {
        &self.items
    }

    /// URL path segment for relative links of this section. `None` for an untitled section.
    pub fn slug(&self) -> Option<String> {
        if self.title.is_empty() {
            None
        } else {
            Some(slugify(&self.title))
        }
    }
}

/// Parsed summary: sections in the order their headings appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of links across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

/// Scan state: closed sections plus the one currently receiving links.
#[derive(Default)]
struct Scan<'a> {
    base_url: &'a str,
    closed: Vec<Section>,
    open: Option<Section>,
}

impl<'a> Scan<'a> {
    fn new(base_url: &'a str) -> Self {
        Self {
            base_url,
            ..Default::default()
        }
    }

    fn accept_line(self, line: &str) -> Self {
        if let Some(captures) = SECTION_HEADING.captures(line) {
            return self.accept_heading(&captures[1]);
        }
        if let Some(captures) = LINK_ITEM.captures(line) {
            return self.accept_link(&captures[1], &captures[2]);
        }
        tracing::trace!("Ignoring line: {}", line);
        self
    }

    fn accept_heading(mut self, title: &str) -> Self {
        if let Some(section) = self.open.take() {
            self.closed.push(section);
        }
        tracing::debug!("Section: {}", title);
        self.open = Some(Section::new(title.to_string()));
        self
    }

    fn accept_link(mut self, title: &str, link_path: &str) -> Self {
        let slug = self.open.as_ref().and_then(Section::slug);
        let url = resolve_link(link_path, slug.as_deref(), self.base_url);
        tracing::debug!("Link: {} -> {}", title, url);

        self.open
            .get_or_insert_with(Section::overview)
            .items
            .push(Entry::new(title.to_string(), url));
        self
    }

    fn finish(mut self) -> Document {
        if let Some(section) = self.open.take() {
            self.closed.push(section);
        }
        Document { sections: self.closed }
    }
}

/// Trims whitespace and byte order marks, so a BOM-prefixed first line still parses.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Parses SUMMARY.md content, resolving every relative link against `base_url`.
///
/// Never fails: lines that are neither a `## heading` nor a `* [title](path)`
/// link are skipped.
///
/// # Examples
///
/// ```
/// # use summary_ltx::parse_summary;
/// let doc = parse_summary("## Getting Started\n* [Intro](intro.md)\n", "https://example.com/docs");
/// assert_eq!(doc.sections()[0].items()[0].url(), "https://example.com/docs/getting-started/intro");
/// ```
pub fn parse_summary(content: &str, base_url: &str) -> Document {
    content
        .lines()
        .map(trim_line)
        .filter(|line| !line.is_empty())
        .fold(Scan::new(base_url), Scan::accept_line)
        .finish()
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    const BASE: &str = "https://example.com/docs";

    fn pairs(section: &Section) -> Vec<(&str, &str)> {
        section.items().iter().map(|e| (e.title(), e.url())).collect()
    }

    #[test]
    fn test_getting_started() {
        let doc = parse_summary(
            indoc! { "
            ## Getting Started
            * [Intro](intro.md)
            * [Setup Guide](setup/guide.md)
            "},
            BASE,
        );

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.sections()[0].title(), "Getting Started");
        assert_eq!(
            pairs(&doc.sections()[0]),
            vec![
                ("Intro", "https://example.com/docs/getting-started/intro"),
                ("Setup Guide", "https://example.com/docs/getting-started/setup/guide"),
            ]
        );
    }

    #[test]
    fn test_readme_under_introduction_is_base_url() {
        let doc = parse_summary(
            indoc! { "
            ## Introduction
            * [Home](README.md)
            * [About](about.md)
            "},
            BASE,
        );

        assert_eq!(
            pairs(&doc.sections()[0]),
            vec![("Home", BASE), ("About", "https://example.com/docs/introduction/about")]
        );
    }

    #[test]
    fn test_absolute_links_unchanged() {
        let doc = parse_summary("## Links\n* [Discord](https://discord.gg/abc)\n", BASE);
        assert_eq!(pairs(&doc.sections()[0]), vec![("Discord", "https://discord.gg/abc")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_summary("", BASE).is_empty());
        assert!(parse_summary("   \n\n\t\n", BASE).is_empty());
    }

    #[test]
    fn test_only_first_link_before_heading_has_no_slug() {
        // the Overview section is open once the first link is added, so later links use its slug
        let doc = parse_summary("* [A](a.md)\n* [B](b.md)\n## G\n", BASE);
        assert_eq!(
            pairs(&doc.sections()[0]),
            vec![("A", "https://example.com/docs/a"), ("B", "https://example.com/docs/overview/b")]
        );
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        let doc = parse_summary("\u{feff}## Intro\n* [X](x.md)\n", BASE);
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.sections()[0].title(), "Intro");
        assert_eq!(pairs(&doc.sections()[0]), vec![("X", "https://example.com/docs/intro/x")]);

        let doc = parse_summary("\u{feff}* [Home](README.md)\n", BASE);
        assert_eq!(pairs(&doc.sections()[0]), vec![("Home", BASE)]);
    }

    #[test]
    fn test_links_before_first_heading() {
        let doc = parse_summary(
            indoc! { "
            # Table of contents

            * [Welcome](README.md)
            * [FAQ](faq.md)

            ## Guides
            * [First Mod](first-mod.md)
            "},
            BASE,
        );

        assert_eq!(doc.len(), 2);

        let overview = &doc.sections()[0];
        assert_eq!(overview.title(), "Overview");
        assert_eq!(
            pairs(overview),
            vec![("Welcome", BASE), ("FAQ", "https://example.com/docs/overview/faq")]
        );

        assert_eq!(
            pairs(&doc.sections()[1]),
            vec![("First Mod", "https://example.com/docs/guides/first-mod")]
        );
    }

    #[test]
    fn test_section_count() {
        // headings only
        let doc = parse_summary("## A\n## B\n* [x](x.md)\n## C\n", BASE);
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.entry_count(), 1);

        // one extra implicit section for links before the first heading
        let doc = parse_summary("* [x](x.md)\n## A\n## B\n## C\n", BASE);
        assert_eq!(doc.len(), 4);

        // no headings, no links
        let doc = parse_summary("Some text\n- [not a star](x.md)\n", BASE);
        assert_eq!(doc.len(), 0);
    }

    #[test]
    fn test_duplicate_headings_are_kept() {
        let doc = parse_summary("## Tools\n* [A](a.md)\n## Tools\n* [B](b.md)\n", BASE);
        let titles: Vec<&str> = doc.sections().iter().map(Section::title).collect();
        assert_eq!(titles, vec!["Tools", "Tools"]);
        assert_eq!(doc.sections()[1].items()[0].url(), "https://example.com/docs/tools/b");
    }

    #[test]
    fn test_unrecognized_lines_are_ignored() {
        let doc = parse_summary(
            indoc! { "
            ### Too deep
            ##NoSpace
            - [Dash item](dash.md)
            *[No space](nospace.md)
            * Plain item without link
            ## Real
            <!-- comment -->
            * [Kept](kept.md)
            "},
            BASE,
        );

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.sections()[0].title(), "Real");
        assert_eq!(pairs(&doc.sections()[0]), vec![("Kept", "https://example.com/docs/real/kept")]);
    }

    #[test]
    fn test_indented_and_first_match_only() {
        let doc = parse_summary(
            indoc! { "
            ## Blocks & Items
                * [Nested](blocks/nested.md) and [Second](second.md)
            \t* [Tabbed](/tabbed.md)
            "},
            BASE,
        );

        assert_eq!(
            pairs(&doc.sections()[0]),
            vec![
                ("Nested", "https://example.com/docs/blocks-and-items/blocks/nested"),
                ("Tabbed", "https://example.com/docs/blocks-and-items/tabbed"),
            ]
        );
    }

    #[test]
    fn test_heading_title_with_extra_spaces() {
        let doc = parse_summary("##    Resources & Tools   \r\n* [Useful Tools](10-useful-tools.md)\r\n", BASE);
        assert_eq!(doc.sections()[0].title(), "Resources & Tools");
        assert_eq!(
            doc.sections()[0].items()[0].url(),
            "https://example.com/docs/resources-and-tools/10-useful-tools"
        );
    }

    #[test]
    fn test_heading_without_slug_characters() {
        let doc = parse_summary("## 🎮\n* [Play](play.md)\n", BASE);
        assert_eq!(doc.sections()[0].slug(), Some(String::new()));
        assert_eq!(doc.sections()[0].items()[0].url(), "https://example.com/docs/play");
    }
}
