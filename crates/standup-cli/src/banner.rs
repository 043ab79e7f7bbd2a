//! Large ASCII-art rendering of the team name.
//!
//! Uses the FIGlet standard font. Names the font cannot draw (anything
//! outside printable ASCII) are shown as plain text.

use figlet_rs::FIGfont;

/// Renders `text` as banner lines, all padded to the same width.
///
/// Falls back to a single line holding `text` itself when the name is blank,
/// contains characters outside printable ASCII, or the font fails to load.
pub fn render(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_graphic() || c == ' ') {
        return vec![text.to_string()];
    }

    let figure = match FIGfont::standard() {
        Ok(font) => font.convert(text).map(|figure| figure.to_string()),
        Err(err) => {
            tracing::warn!(%err, "failed to load banner font");
            None
        }
    };
    let Some(figure) = figure else {
        return vec![text.to_string()];
    };

    let mut lines: Vec<&str> = figure.lines().collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return vec![text.to_string()];
    }

    let width = lines
        .iter()
        .map(|line| line.trim_end().chars().count())
        .max()
        .unwrap_or(0);
    lines
        .into_iter()
        .map(|line| format!("{:<width$}", line.trim_end()))
        .collect()
}

/// Display width of the widest banner line.
pub fn width(lines: &[String]) -> usize {
    lines.iter().map(|line| line.chars().count()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_spans_several_lines() {
        let lines = render("ASDF");
        assert!(lines.len() > 1, "{lines:?}");
        assert!(lines.iter().all(|line| line.chars().count() == width(&lines)));
        assert!(!lines.last().unwrap().trim().is_empty(), "{lines:?}");
    }

    #[test]
    fn test_plain_text_fallback() {
        assert_eq!(render(""), vec![String::new()]);
        assert_eq!(render("   "), vec![String::new()]);
        assert_eq!(render("Équipe"), vec!["Équipe".to_string()]);
    }

    #[test]
    fn test_width() {
        let lines = vec!["ab".to_string(), "abcd".to_string()];
        assert_eq!(width(&lines), 4);
        assert_eq!(width(&[]), 0);
    }
}
