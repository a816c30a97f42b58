//! File names for exported artifacts.

use layout::Layout;

pub const DEFAULT_JSON_STEM: &str = "layout";
pub const DEFAULT_SVG_STEM: &str = "floorplan";

/// Strip characters that would escape the export directory or that common
/// filesystems reject.
fn sanitize_stem(stem: &str) -> String {
    stem.chars()
        .filter(|c| !matches!(c, '/' | '\\' | ':' | '\0'))
        .collect::<String>()
        .trim()
        .trim_matches('.')
        .to_string()
}

fn stem_for(layout: &Layout, fallback: &str) -> String {
    layout
        .description()
        .map(sanitize_stem)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// `{description}.json`, or `layout.json`.
pub fn json_file_name(layout: &Layout) -> String {
    format!("{}.json", stem_for(layout, DEFAULT_JSON_STEM))
}

/// `{description}.svg`, or `floorplan.svg`.
pub fn svg_file_name(layout: &Layout) -> String {
    format!("{}.svg", stem_for(layout, DEFAULT_SVG_STEM))
}

/// `diff_{project}_{left}_vs_{right}.json`.
pub fn diff_report_file_name(project: &str, left: &str, right: &str) -> String {
    format!(
        "diff_{}_{}_vs_{}.json",
        sanitize_stem(project),
        sanitize_stem(left),
        sanitize_stem(right)
    )
}
