//! Turns raw model output into a bounded list of summary points.
//!
//! The primary strategy keeps lines the model prefixed with the bullet
//! glyph. When the model ignored the format instruction entirely, a
//! sentence-splitting fallback salvages what it can, and a placeholder
//! point covers the case where even that yields nothing.

/// Upper bound on the number of summary points returned.
pub const MAX_POINTS: usize = 3;

/// Bullet glyph the model is instructed to prefix each point with.
pub const BULLET: char = '\u{2022}';

/// Single point returned when neither parse strategy yields anything.
pub const PLACEHOLDER_POINT: &str = "Summary could not be generated properly.";

/// Parse model output into 1 to [`MAX_POINTS`] non-empty points.
#[must_use]
pub fn parse_points(content: &str) -> Vec<String> {
    let mut points = bullet_lines(content);
    if points.is_empty() {
        points = sentence_fallback(content);
    }
    if points.is_empty() {
        points.push(PLACEHOLDER_POINT.to_string());
    }
    points.truncate(MAX_POINTS);
    points
}

/// Lines starting with the bullet glyph, glyph and surrounding
/// whitespace stripped, empties discarded.
fn bullet_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix(BULLET))
        .map(str::trim)
        .filter(|point| !point.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Split on runs of sentence-terminating punctuation and keep the
/// first [`MAX_POINTS`] non-empty pieces.
fn sentence_fallback(content: &str) -> Vec<String> {
    content
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .take(MAX_POINTS)
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_lines_strip_glyph_and_whitespace() {
        let content = "\u{2022} First point\n  \u{2022}   Second point  \n\u{2022} Third point";
        assert_eq!(
            bullet_lines(content),
            vec!["First point", "Second point", "Third point"]
        );
    }

    #[test]
    fn bullet_lines_discard_glyph_only_lines() {
        assert!(bullet_lines("\u{2022}\n\u{2022}   \n").is_empty());
    }

    #[test]
    fn sentence_fallback_handles_punctuation_runs() {
        assert_eq!(
            sentence_fallback("One!! Two?! Three... Four."),
            vec!["One", "Two", "Three"]
        );
    }
}
