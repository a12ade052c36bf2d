//! HTML-entity escaping for user-supplied text.
//!
//! Every submitted field passes through here before being embedded in a
//! generated email document, so field contents can never be interpreted as
//! markup. Escaping covers exactly the five HTML-special characters.

/// Escapes `& < > " '` to their entity forms.
///
/// Strings without any of the five characters come back unchanged.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes HTML and turns newlines into `<br>` tags.
///
/// Used for the free-text request field so multi-line input renders as
/// separate lines. The replacement happens after escaping, so the inserted
/// tags are the only markup in the result.
pub fn escape_html_multiline(input: &str) -> String {
    escape_html(input).replace("\r\n", "<br>").replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_script_tag() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
    }

    #[test]
    fn escapes_all_five_special_characters() {
        assert_eq!(
            escape_html(r#"&<>"'"#),
            "&amp;&lt;&gt;&quot;&#039;"
        );
    }

    #[test]
    fn leaves_plain_text_unchanged() {
        assert_eq!(escape_html("Jane Doe, cleaning please"), "Jane Doe, cleaning please");
    }

    #[test]
    fn ampersand_escapes_first() {
        // "&lt;" in the input must not collapse into a real "<".
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn multiline_becomes_br_tags() {
        assert_eq!(escape_html_multiline("line1\nline2"), "line1<br>line2");
    }

    #[test]
    fn multiline_handles_crlf() {
        assert_eq!(escape_html_multiline("line1\r\nline2"), "line1<br>line2");
    }

    #[test]
    fn multiline_escapes_before_breaking_lines() {
        assert_eq!(
            escape_html_multiline("<b>\nbold</b>"),
            "&lt;b&gt;<br>bold&lt;/b&gt;"
        );
    }
}
