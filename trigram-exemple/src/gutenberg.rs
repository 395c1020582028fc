use regex::Regex;
use std::sync::LazyLock;

/// Markers opening the body of a Project Gutenberg text, checked in order.
const START_MARKERS: [&str; 4] = [
    "*** start of",
    "***start of",
    "*start of the project gutenberg",
    "start of the project gutenberg",
];

/// Markers closing the body, searched from the end.
const END_MARKERS: [&str; 4] = [
    "*** end of",
    "***end of",
    "*end of the project gutenberg",
    "end of the project gutenberg",
];

/// Fallback body openers when no start marker is present.
static FALLBACK_STARTS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"\*\*\*.*?\n\n").expect("valid regex"),
        Regex::new(r"(?i)chapter [i1]\s*\n").expect("valid regex"),
        Regex::new(r"(?i)chapter one\s*\n").expect("valid regex"),
    ]
});

static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));
static SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").expect("valid regex"));

/// Strips the Project Gutenberg header, footer and license boilerplate.
///
/// - The body starts on the line after the first start marker, or right
///   after a fallback heading (`*** ...` block, `chapter i`, `chapter one`)
/// - The body ends on the line before the last end marker
/// - Runs of 3+ newlines become a blank line, runs of spaces one space
///
/// Text without recognizable markers is only whitespace-squeezed.
pub fn strip_boilerplate(text: &str) -> String {
    // ASCII lowering keeps byte offsets aligned with `text`.
    let lower = text.to_ascii_lowercase();

    // A start marker with no line break after it counts as no marker.
    let start = START_MARKERS
        .iter()
        .find_map(|marker| lower.find(marker))
        .and_then(|idx| text[idx..].find('\n').map(|nl| idx + nl))
        .or_else(|| {
            FALLBACK_STARTS
                .iter()
                .find_map(|re| re.find(text))
                .map(|m| m.end())
        });

    let end = END_MARKERS
        .iter()
        .find_map(|marker| lower.rfind(marker))
        .map_or(Some(text.len()), |idx| text[..idx].rfind('\n'));

    let body = match (start, end) {
        (Some(start), Some(end)) if end > start => &text[start..end],
        _ => text,
    };

    let body = BLANK_RUNS.replace_all(body, "\n\n");
    let body = SPACE_RUNS.replace_all(&body, " ");
    body.trim().to_owned()
}
