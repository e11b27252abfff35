//! README heading extraction.

use std::collections::BTreeSet;

/// Root-level file names recognized as the project README, by preference.
pub const README_NAMES: &[&str] = &["readme.md", "readme.markdown", "readme"];

/// Collect normalized ATX and setext headings, skipping fenced code blocks
/// and a leading front-matter block.
pub fn extract_headings(markdown: &str) -> BTreeSet<String> {
    let mut headings = BTreeSet::new();
    let mut fence: Option<&str> = None;
    let mut previous: Option<&str> = None;

    for line in skip_front_matter(markdown) {
        let trimmed = line.trim();

        if let Some(marker) = fence {
            if trimmed.starts_with(marker) {
                fence = None;
            }
            continue;
        }
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            fence = Some(&trimmed[..3]);
            previous = None;
            continue;
        }

        if let Some(text) = atx_heading(line) {
            insert_heading(&mut headings, text);
            previous = None;
        } else if is_setext_underline(trimmed) {
            if let Some(text) = previous.take() {
                insert_heading(&mut headings, text);
            }
        } else {
            previous = (!trimmed.is_empty()).then_some(trimmed);
        }
    }

    headings
}

/// Lines after a `---` front-matter block opening the document. An unclosed
/// block is treated as ordinary content.
fn skip_front_matter(markdown: &str) -> std::str::Lines<'_> {
    let mut lines = markdown.lines();
    if lines.next().map(str::trim_end) != Some("---") {
        return markdown.lines();
    }
    while let Some(line) = lines.next() {
        if matches!(line.trim_end(), "---" | "...") {
            return lines;
        }
    }
    markdown.lines()
}

/// True when `section`'s words appear contiguously among `heading`'s words.
pub fn heading_matches(heading: &str, section: &str) -> bool {
    let wanted = words(section);
    if wanted.is_empty() {
        return false;
    }
    let have = words(heading);
    have.windows(wanted.len()).any(|w| w == wanted.as_slice())
}

fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn insert_heading(headings: &mut BTreeSet<String>, text: &str) {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    if !normalized.is_empty() {
        headings.insert(normalized);
    }
}

/// `# Title`, `## Title ##`; at most three spaces of indentation.
fn atx_heading(line: &str) -> Option<&str> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }
    let rest = &line[indent..];
    let level = rest.len() - rest.trim_start_matches('#').len();
    if level == 0 || level > 6 {
        return None;
    }
    let text = &rest[level..];
    if !text.is_empty() && !text.starts_with([' ', '\t']) {
        return None;
    }
    let text = text.trim();
    // A closing sequence only counts when separated by whitespace ("C#" stays).
    let without_closing = text.trim_end_matches('#');
    if without_closing.is_empty() || without_closing.ends_with([' ', '\t']) {
        Some(without_closing.trim_end())
    } else {
        Some(text)
    }
}

fn is_setext_underline(trimmed: &str) -> bool {
    !trimmed.is_empty() && (trimmed.chars().all(|c| c == '=') || trimmed.chars().all(|c| c == '-'))
}
