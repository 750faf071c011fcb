use crate::generative::GenerativeError;

const BULLETS_MARKER: &str = "BULLET_POINTS:";
const PARAGRAPH_MARKER: &str = "PARAGRAPH:";
const BULLET_GLYPHS: [char; 3] = ['-', '•', '*'];

/// A bullet must have at least this many words to be kept.
pub const MIN_BULLET_WORDS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSummary {
    pub bullet_points: Vec<String>,
    pub paragraph: String,
}

/// Parse the service's reply into bullets and a paragraph.
///
/// With both markers present, bullets come from the section before
/// `PARAGRAPH:` and the paragraph is everything after it. Without them every
/// line is a bullet candidate and the paragraph is the bullets joined. Either
/// way a reply with no usable bullet or an empty paragraph is rejected whole.
pub fn parse_generative_response(raw: &str) -> Result<GeneratedSummary, GenerativeError> {
    let raw = raw.trim();

    let (bullet_points, paragraph) = match raw.split_once(PARAGRAPH_MARKER) {
        Some((head, tail)) if raw.contains(BULLETS_MARKER) => {
            let bullets = bullet_lines(&head.replace(BULLETS_MARKER, ""));
            (bullets, tail.trim().to_string())
        }
        _ => {
            let bullets = bullet_lines(raw);
            let paragraph = bullets.join(" ");
            (bullets, paragraph)
        }
    };

    if bullet_points.is_empty() {
        return Err(GenerativeError::Malformed(
            "no bullet points of at least four words".to_string(),
        ));
    }
    if paragraph.is_empty() {
        return Err(GenerativeError::Malformed("empty paragraph section".to_string()));
    }

    Ok(GeneratedSummary {
        bullet_points,
        paragraph,
    })
}

fn bullet_lines(section: &str) -> Vec<String> {
    section
        .lines()
        .map(|line| line.trim().trim_start_matches(BULLET_GLYPHS).trim())
        .filter(|line| line.split_whitespace().count() >= MIN_BULLET_WORDS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_marker_layout() {
        let raw = "BULLET_POINTS:\n- Glaciers retreat faster each decade.\n• Too short.\n* Meltwater raises the sea level.\n\nPARAGRAPH:\nGlaciers are shrinking. Sea levels rise as a result.\n";
        let parsed = parse_generative_response(raw).unwrap();
        assert_eq!(
            parsed.bullet_points,
            vec![
                "Glaciers retreat faster each decade.".to_string(),
                "Meltwater raises the sea level.".to_string(),
            ]
        );
        assert_eq!(parsed.paragraph, "Glaciers are shrinking. Sea levels rise as a result.");
    }

    #[test]
    fn falls_back_to_line_layout_without_markers() {
        let raw = "- Glaciers retreat faster each decade.\n- Meltwater raises the sea level.";
        let parsed = parse_generative_response(raw).unwrap();
        assert_eq!(parsed.bullet_points.len(), 2);
        assert_eq!(
            parsed.paragraph,
            "Glaciers retreat faster each decade. Meltwater raises the sea level."
        );
    }

    #[test]
    fn rejects_replies_without_usable_bullets() {
        let err = parse_generative_response("BULLET_POINTS:\n- ok\nPARAGRAPH:\nSomething.").unwrap_err();
        assert!(matches!(err, GenerativeError::Malformed(_)));

        let err = parse_generative_response("").unwrap_err();
        assert!(matches!(err, GenerativeError::Malformed(_)));
    }

    #[test]
    fn rejects_empty_paragraph_section() {
        let raw = "BULLET_POINTS:\n- Glaciers retreat faster each decade.\nPARAGRAPH:\n   ";
        let err = parse_generative_response(raw).unwrap_err();
        assert!(matches!(err, GenerativeError::Malformed(_)));
    }
}
