//! Markdown-to-HTML rendering for result payloads.

use pulldown_cmark::{html, Parser};

/// Render a Markdown result payload to an HTML fragment.
///
/// The input comes from the store as-is and is embedded unsanitized;
/// the payload is trusted by design (known security caveat, to be
/// revisited only as a deliberate design change).
pub fn markdown_to_html(input: &str) -> String {
    let parser = Parser::new(input);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_heading() {
        assert_eq!(markdown_to_html("# Hi"), "<h1>Hi</h1>\n");
    }

    #[test]
    fn renders_paragraphs_and_emphasis() {
        let html = markdown_to_html("Hola **mundo**.\n\nSegundo párrafo.");
        assert!(html.contains("<strong>mundo</strong>"));
        assert!(html.contains("<p>Segundo párrafo.</p>"));
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(markdown_to_html(""), "");
    }

    #[test]
    fn raw_html_passes_through_unsanitized() {
        // Documented caveat: payloads are trusted, raw HTML is kept.
        let html = markdown_to_html("<em>directo</em>");
        assert!(html.contains("<em>directo</em>"));
    }
}
