//! Markdown snippets interpolated into download tables.

/// `[label](url)`
pub fn link(label: &str, url: &str) -> String {
    format!("[{}]({})", label, url)
}

/// `{icon} [label](url)`, used for per-platform downloads.
pub fn download_link(icon: &str, label: &str, url: &str) -> String {
    format!("{} {}", icon, link(label, url))
}

/// Link to an artifact that may not exist for every release.
pub fn optional_link(label: &str, url: Option<&str>) -> Option<String> {
    url.map(|u| link(label, u))
}

/// Inline icon carrying a CSS class, e.g. `:icon:{.warning}`.
pub fn styled_icon(icon: &str, class: &str) -> String {
    format!("{}{{.{}}}", icon, class)
}
