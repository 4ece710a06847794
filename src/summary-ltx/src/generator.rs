//! Rendering of parsed summaries into llms.txt, and the full generation run.

use crate::config::GeneratorOptions;
use crate::errors::Result;
use crate::files::{load_summary, write_llms_txt};
use crate::summary::{Document, OVERVIEW_TITLE, parse_summary};

/// A rendered llms.txt, with the number of summary sections it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmsTxt {
    content: String,
    section_count: usize,
}

impl LlmsTxt {
    /// Renders `document` with the header and base URL from `options`.
    pub fn render(document: &Document, options: &GeneratorOptions) -> Self {
        Self {
            content: render_llms_txt(document, options),
            section_count: document.len(),
        }
    }

    /// Gets the llms.txt content as a string.
    pub fn md_content(&self) -> &str {
        &self.content
    }

    /// Destroy the LlmsTxt wrapper, extracting the rendered text.
    pub fn extract(self) -> String {
        self.content
    }

    /// Number of summary sections, including an implicit Overview section.
    pub fn section_count(&self) -> usize {
        self.section_count
    }

    /// Size of the content in characters (not bytes).
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// The first `max_chars` characters of the content.
    pub fn preview(&self, max_chars: usize) -> &str {
        match self.content.char_indices().nth(max_chars) {
            Some((end, _)) => &self.content[..end],
            None => &self.content,
        }
    }
}

/// Renders the llms.txt text for a parsed summary.
///
/// The header (title, description, `## Table of Contents` and a link to the
/// site root) is always present. Each section then gets a `## title` header,
/// except sections titled `Overview`, whose links follow the root link directly.
pub fn render_llms_txt(document: &Document, options: &GeneratorOptions) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", options.title));
    output.push_str(&format!("{}\n\n", options.description));
    output.push_str("## Table of Contents\n\n");
    output.push_str(&format!("- [{}]({})\n", OVERVIEW_TITLE, options.base_url));

    for section in document.sections() {
        if section.title() == OVERVIEW_TITLE {
            output.push('\n');
        } else {
            output.push_str(&format!("\n## {}\n\n", section.title()));
        }

        for entry in section.items() {
            output.push_str(&format!("- [{}]({})\n", entry.title(), entry.url()));
        }
    }

    output
}

/// Generates llms.txt from the configured SUMMARY.md and writes it to the configured output.
///
/// This function:
/// 1. Reads the summary file
/// 2. Parses sections and resolves links against the base URL
/// 3. Renders the llms.txt text
/// 4. Writes it, replacing any previous file
///
/// # Errors
///
/// Returns an error if:
/// - The summary file is missing or unreadable (nothing is written)
/// - The output file cannot be written
pub fn generate(options: &GeneratorOptions) -> Result<LlmsTxt> {
    tracing::info!("Parsing SUMMARY.md from {}", options.summary_path.display());
    let content = load_summary(&options.summary_path)?;

    let document = parse_summary(&content, &options.base_url);
    tracing::info!(
        "Found {} sections with {} links",
        document.len(),
        document.entry_count()
    );

    tracing::info!("Generating llms.txt content");
    let llms_txt = LlmsTxt::render(&document, options);

    write_llms_txt(&options.output_path, llms_txt.md_content())?;
    tracing::info!("llms.txt generated at: {}", options.output_path.display());

    Ok(llms_txt)
}
