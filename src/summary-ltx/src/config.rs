//! Configuration options for llms.txt generation.

use std::path::PathBuf;

/// Documentation site root that relative summary links are resolved against.
pub const DEFAULT_BASE_URL: &str = "https://britakee-studios.gitbook.io/hytale-modding-documentation";

/// Where the GitBook table of contents is read from.
pub const DEFAULT_SUMMARY_PATH: &str = "Documentation/SUMMARY.md";

/// Where the generated index is written.
pub const DEFAULT_OUTPUT_PATH: &str = "Documentation/llms.txt";

/// H1 of the generated document.
pub const DEFAULT_TITLE: &str = "Hytale Modding Documentation";

/// Line under the H1 of the generated document.
pub const DEFAULT_DESCRIPTION: &str =
    "Hytale Modding Documentation — Complete guide for content creators and developers 🎮";

/// Configuration options for the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Root URL for relative links. Also the target of the Overview link and of README pages.
    pub base_url: String,
    /// Input SUMMARY.md
    pub summary_path: PathBuf,
    /// Output llms.txt (overwritten)
    pub output_path: PathBuf,
    /// Title of the generated document
    pub title: String,
    /// Description of the generated document
    pub description: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            summary_path: PathBuf::from(DEFAULT_SUMMARY_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl GeneratorOptions {
    /// Creates a new builder for GeneratorOptions.
    pub fn builder() -> GeneratorOptionsBuilder {
        GeneratorOptionsBuilder::default()
    }
}

/// Builder for GeneratorOptions. Unset fields fall back to the `DEFAULT_*` constants.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptionsBuilder {
    base_url: Option<String>,
    summary_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    title: Option<String>,
    description: Option<String>,
}

impl GeneratorOptionsBuilder {
    /// Sets the base URL. Used verbatim: no trailing `/` is added or removed.
    pub fn base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the SUMMARY.md path to read.
    pub fn summary_path(mut self, path: PathBuf) -> Self {
        self.summary_path = Some(path);
        self
    }

    /// Sets the llms.txt path to write.
    pub fn output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }

    /// Sets the document title.
    pub fn title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets the document description.
    pub fn description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    /// Builds the GeneratorOptions.
    pub fn build(self) -> GeneratorOptions {
        let defaults = GeneratorOptions::default();
        GeneratorOptions {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            summary_path: self.summary_path.unwrap_or(defaults.summary_path),
            output_path: self.output_path.unwrap_or(defaults.output_path),
            title: self.title.unwrap_or(defaults.title),
            description: self.description.unwrap_or(defaults.description),
        }
    }
}
