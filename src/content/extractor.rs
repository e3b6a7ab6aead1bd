use std::sync::OnceLock;
use html2text::render::text_renderer::TrivialDecorator;
use regex::Regex;

// Wide enough that html2text never wraps an excerpt source.
const UNWRAPPED_WIDTH: usize = 10_000;

fn whitespace() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"))
}

/// Render article HTML as wrapped plain text for terminal display.
pub fn to_plain_text(html: &str, width: usize) -> String {
    let text = html2text::from_read(html.as_bytes(), width.max(20));
    text.trim_end().to_string()
}

/// Drop markup, decode entities and collapse whitespace to single spaces.
pub fn strip_html(html: &str) -> String {
    let text = html2text::from_read_with_decorator(
        html.as_bytes(),
        UNWRAPPED_WIDTH,
        TrivialDecorator::new(),
    );
    whitespace().replace_all(&text, " ").trim().to_string()
}

/// Short summary of an HTML body, cut at a word boundary.
pub fn derive_excerpt(html: &str, max_chars: usize) -> String {
    let text = strip_html(html);
    if text.chars().count() <= max_chars {
        return text;
    }

    let cut: String = text.chars().take(max_chars).collect();
    let cut = match cut.rfind(' ') {
        Some(idx) if idx > 0 => &cut[..idx],
        _ => cut.as_str(),
    };
    let cut = cut.trim_end_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace());
    format!("{}...", cut)
}

/// URL slug: lowercase ASCII alphanumerics separated by single hyphens.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html() {
        let html = "<p>Rock &amp; roll</p>\n   <p>is <strong>back</strong></p>";
        assert_eq!(strip_html(html), "Rock & roll is back");
    }

    #[test]
    fn test_strip_html_decodes_named_and_numeric_entities() {
        let html = "<p>Caf&eacute; owners &mdash; and &#8220;locals&#8221; agree</p>";
        assert_eq!(strip_html(html), "Caf\u{e9} owners \u{2014} and \u{201c}locals\u{201d} agree");
        assert_eq!(
            derive_excerpt(html, 160),
            "Caf\u{e9} owners \u{2014} and \u{201c}locals\u{201d} agree"
        );
    }

    #[test]
    fn test_derive_excerpt_short_text_unchanged() {
        assert_eq!(derive_excerpt("<p>Short body.</p>", 50), "Short body.");
    }

    #[test]
    fn test_derive_excerpt_cuts_at_word_boundary() {
        let html = "<p>The quick brown fox, jumps over the lazy dog</p>";
        assert_eq!(derive_excerpt(html, 22), "The quick brown fox...");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Technology"), "technology");
        assert_eq!(slugify("  Science & Space! "), "science-space");
        assert_eq!(slugify("Top 10 -- Lists"), "top-10-lists");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_to_plain_text_drops_markup() {
        let text = to_plain_text("<p>First paragraph.</p><p>Second one.</p>", 80);
        assert!(text.contains("First paragraph."));
        assert!(text.contains("Second one."));
        assert!(!text.contains("<p>"));
    }
}
