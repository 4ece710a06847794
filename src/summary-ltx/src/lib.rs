//! # SUMMARY.md to llms.txt
//!
//! Converts a GitBook-style table of contents (`SUMMARY.md`) into a flat
//! `llms.txt` link index.
//!
//! The pipeline runs once, front to back:
//!
//! 1. load the summary file ([`load_summary`])
//! 2. parse sections and links, resolving each link to a full URL ([`parse_summary`])
//! 3. render the llms.txt text ([`render_llms_txt`])
//! 4. write it out ([`write_llms_txt`])
//!
//! [`generate`] does all four in one call.
//!
//! ```no_run
//! use summary_ltx::{GeneratorOptions, generate};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = GeneratorOptions::builder()
//!         .base_url("https://example.com/docs".to_string())
//!         .summary_path("docs/SUMMARY.md".into())
//!         .output_path("docs/llms.txt".into())
//!         .build();
//!
//!     let llms_txt = generate(&options)?;
//!     println!("{}", llms_txt.md_content());
//!     Ok(())
//! }
//! ```

mod config;
mod errors;
mod files;
mod generator;
pub mod slug;
mod summary;
pub mod url_utils;

pub use config::{
    DEFAULT_BASE_URL, DEFAULT_DESCRIPTION, DEFAULT_OUTPUT_PATH, DEFAULT_SUMMARY_PATH, DEFAULT_TITLE,
    GeneratorOptions, GeneratorOptionsBuilder,
};
pub use errors::{LlmsTxtError, Result};
pub use files::{load_summary, write_llms_txt};
pub use generator::{LlmsTxt, generate, render_llms_txt};
pub use slug::slugify;
pub use summary::{Document, Entry, OVERVIEW_TITLE, Section, parse_summary};
pub use url_utils::resolve_link;
