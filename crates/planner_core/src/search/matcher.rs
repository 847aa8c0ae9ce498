//! Pattern compilation, matching and highlight markup.
//!
//! # Responsibility
//! - Turn user search text into a case-configured regex matcher.
//! - Evaluate matchers against the fixed per-activity text fields.
//! - Produce escaped display text with matched spans wrapped in `<mark>`.
//!
//! # Invariants
//! - Blank input clears the matcher (no filtering, no highlighting).
//! - Compilation failure clears the matcher and surfaces the engine's own
//!   diagnostic; it never leaves the previous matcher active.
//! - Highlighting degrades to fully escaped plain text, never an error.

use std::error::Error;
use std::fmt::{Display, Formatter};

use regex::{Regex, RegexBuilder};

use crate::model::activity::Activity;

pub type SearchResult<T> = Result<T, SearchError>;

/// Search-layer error for pattern compilation.
#[derive(Debug)]
pub enum SearchError {
    /// User-provided pattern is not valid regex syntax.
    InvalidPattern { pattern: String, message: String },
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPattern { pattern, message } => {
                write!(f, "invalid regex `{pattern}`: {message}")
            }
        }
    }
}

impl Error for SearchError {}

/// Flag configuration inferred from the pattern text.
///
/// Patterns are matched case-insensitively by default. A literal `/` in the
/// pattern switches to raw mode with no implicit flags, letting advanced
/// users control case handling with inline `(?i)` groups themselves. This
/// is an explicit rule of the search box, not regex engine behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    pub case_insensitive: bool,
    pub treat_as_raw: bool,
}

impl MatchOptions {
    pub fn infer(pattern: &str) -> Self {
        let treat_as_raw = pattern.contains('/');
        Self {
            case_insensitive: !treat_as_raw,
            treat_as_raw,
        }
    }
}

/// Compiled search pattern state used for filtering and highlighting.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    /// Whether the pattern matches any of the activity's text fields:
    /// title, description, tag, ISO due-date string, or duration as text.
    pub fn matches_activity(&self, activity: &Activity) -> bool {
        self.regex.is_match(&activity.title)
            || self.regex.is_match(&activity.description)
            || self.regex.is_match(&activity.tag)
            || self.regex.is_match(&activity.due_date.to_string())
            || self.regex.is_match(&activity.duration.to_string())
    }

    /// Escapes `text` for safe display, wrapping every matched span in a
    /// `<mark>` highlight marker.
    pub fn highlight(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        for found in self.regex.find_iter(text) {
            // Zero-width matches would re-highlight the same position; the
            // escaped text between matches still advances the cursor.
            out.push_str(&escape_html(&text[cursor..found.start()]));
            if !found.as_str().is_empty() {
                out.push_str("<mark>");
                out.push_str(&escape_html(found.as_str()));
                out.push_str("</mark>");
            }
            cursor = found.end();
        }
        out.push_str(&escape_html(&text[cursor..]));
        out
    }
}

/// Compiles user search text into an optional matcher.
///
/// Blank or whitespace-only input yields `Ok(None)`: filtering and
/// highlighting are both off.
pub fn compile(pattern: &str) -> SearchResult<Option<Matcher>> {
    if pattern.trim().is_empty() {
        return Ok(None);
    }
    let options = MatchOptions::infer(pattern);
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(options.case_insensitive)
        .build()
        .map_err(|err| SearchError::InvalidPattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })?;
    Ok(Some(Matcher { regex }))
}

/// Counts the records in `collection` the matcher matches.
pub fn count_matches(matcher: &Matcher, collection: &[Activity]) -> usize {
    collection
        .iter()
        .filter(|activity| matcher.matches_activity(activity))
        .count()
}

/// Escapes text for embedding in display markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Escaped display text with highlighting applied when a matcher is active.
pub fn highlight_or_escape(matcher: Option<&Matcher>, text: &str) -> String {
    match matcher {
        Some(matcher) => matcher.highlight(text),
        None => escape_html(text),
    }
}

#[cfg(test)]
mod tests {
    use super::{compile, escape_html, MatchOptions};

    #[test]
    fn blank_pattern_clears_the_matcher() {
        assert!(compile("").unwrap().is_none());
        assert!(compile("   ").unwrap().is_none());
    }

    #[test]
    fn slash_switches_to_raw_mode() {
        assert!(MatchOptions::infer("stu").case_insensitive);
        assert!(!MatchOptions::infer("stu").treat_as_raw);

        let raw = MatchOptions::infer("a/b");
        assert!(raw.treat_as_raw);
        assert!(!raw.case_insensitive);
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"x" & 'y'</b>"#),
            "&lt;b&gt;&quot;x&quot; &amp; &#039;y&#039;&lt;/b&gt;"
        );
    }

    #[test]
    fn highlight_wraps_matches_and_escapes_the_rest() {
        let matcher = compile("mid").unwrap().unwrap();
        assert_eq!(
            matcher.highlight("a<b> MIDterm"),
            "a&lt;b&gt; <mark>MID</mark>term"
        );
    }
}
