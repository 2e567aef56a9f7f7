use std::collections::{HashMap, HashSet};

use pulldown_cmark::{Event, Options, Parser};

/// Renders lesson theory written in Markdown to sanitized HTML.
///
/// Raw HTML in the source is shown as text, so `Vec<u8>` stays readable.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(input, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "br", "em", "strong", "del", "code", "pre", "blockquote", "ul", "ol", "li", "a", "h1",
        "h2", "h3", "h4", "table", "thead", "tbody", "tr", "th", "td",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .link_rel(Some("noopener noreferrer"))
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{markdown_to_html, sanitize_html};

    #[test]
    fn theory_markdown_renders_lists_and_emphasis() {
        let html = markdown_to_html("**Convolution** basics\n\n- kernels\n- strides");
        assert!(html.contains("<strong>Convolution</strong>"));
        assert!(html.contains("<li>kernels</li>"));
    }

    #[test]
    fn plain_text_keeps_line_content() {
        let html = markdown_to_html("Line one\nLine two");
        assert!(html.contains("Line one"));
        assert!(html.contains("Line two"));
    }

    #[test]
    fn angle_brackets_and_line_breaks_survive() {
        let html = markdown_to_html("Use Vec<u8> for bytes.\nStep 1\nStep 2");
        assert!(html.contains("Vec&lt;u8&gt; for bytes."), "got {html}");
        assert!(html.contains("Step 1\nStep 2"), "got {html}");
    }

    #[test]
    fn scripts_and_js_links_are_stripped() {
        let html = markdown_to_html("[Link](javascript:alert(1))\n\n<script>alert(1)</script>");
        assert!(html.contains("Link"));
        assert!(!html.contains("javascript:"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn links_get_safe_rel() {
        let html = sanitize_html(r#"<a href="https://example.com">x</a>"#);
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }
}
