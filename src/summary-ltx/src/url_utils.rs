//! Resolution of SUMMARY.md link targets into documentation URLs.

/// Path key of a site's index page. Always resolves to the bare base URL.
pub const README_KEY: &str = "README";

/// True if the link target is already a full URL and must be used as-is.
///
/// Anything starting with `http` counts, including `https`.
pub fn is_absolute_link(link_path: &str) -> bool {
    link_path.starts_with("http")
}

/// Strips one leading `/` and one trailing `.md` from a relative link target.
///
/// # Examples
///
/// ```
/// # use summary_ltx::url_utils::path_key;
/// assert_eq!(path_key("/setup/guide.md"), "setup/guide");
/// assert_eq!(path_key("README.md"), "README");
/// assert_eq!(path_key("notes.md.md"), "notes.md");
/// ```
pub fn path_key(link_path: &str) -> &str {
    let without_slash = link_path.strip_prefix('/').unwrap_or(link_path);
    without_slash.strip_suffix(".md").unwrap_or(without_slash)
}

/// Resolves a SUMMARY.md link target to a full URL.
///
/// # Rules
///
/// 1. `http…` targets are returned unchanged.
/// 2. A `README` page resolves to `base_url` itself.
/// 3. Otherwise the URL is `<base_url>/<section_slug>/<path_key>`, with the slug
///    segment left out when `section_slug` is `None` or empty.
///
/// # Examples
///
/// ```
/// # use summary_ltx::resolve_link;
/// let base = "https://example.com/docs";
/// assert_eq!(resolve_link("intro.md", Some("getting-started"), base), "https://example.com/docs/getting-started/intro");
/// assert_eq!(resolve_link("/README.md", Some("introduction"), base), base);
/// assert_eq!(resolve_link("faq.md", None, base), "https://example.com/docs/faq");
/// ```
pub fn resolve_link(link_path: &str, section_slug: Option<&str>, base_url: &str) -> String {
    if is_absolute_link(link_path) {
        return link_path.to_string();
    }

    let key = path_key(link_path);
    if key == README_KEY {
        return base_url.to_string();
    }

    match section_slug.filter(|slug| !slug.is_empty()) {
        Some(slug) => format!("{}/{}/{}", base_url, slug, key),
        None => format!("{}/{}", base_url, key),
    }
}
