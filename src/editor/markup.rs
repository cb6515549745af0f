//! Rendered-markup projection of the document.
//!
//! Read-only view for collaborators that want the expression with its token
//! colors, e.g. a preview pane. Inks resolve to colors through the theme;
//! un-inked text is emitted bare.

use crate::theme::Theme;

use super::document::Document;

/// Render the document as HTML-style colored spans
pub fn render_markup(document: &Document, theme: &Theme) -> String {
    let mut out = String::with_capacity(document.len_chars() * 2);
    for token in document.tokens() {
        let escaped = html_escape::encode_text(&token.text);
        match token.ink {
            Some(ink) => {
                out.push_str(&format!(
                    "<span style=\"color: {};\">{}</span>",
                    theme.color_for(ink),
                    escaped
                ));
            }
            None => out.push_str(&escaped),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::token::Token;

    #[test]
    fn test_colors_by_ink() {
        let doc = Document::from_tokens(vec![
            Token::property("speed"),
            Token::structural(" + "),
        ]);
        let theme = Theme::fallback();
        let markup = render_markup(&doc, &theme);
        assert!(markup.contains(&format!(
            "<span style=\"color: {};\">speed</span>",
            theme.colors.accent
        )));
        assert!(markup.contains(&format!(
            "<span style=\"color: {};\"> + </span>",
            theme.colors.ink
        )));
    }

    #[test]
    fn test_escapes_free_text() {
        let doc = Document::from_tokens(vec![Token::free("1<2 & 3")]);
        let markup = render_markup(&doc, &Theme::fallback());
        assert_eq!(markup, "1&lt;2 &amp; 3");
    }
}
