use comrak::nodes::NodeValue;
use comrak::{format_html, parse_document, Arena, Options};

/// Markdown shown when a document has no content.
pub const EMPTY_PLACEHOLDER: &str = "_No content available._";

/// Link tokens authors can use in stored documents, and the routes they point to.
pub const INTERNAL_ROUTES: &[(&str, &str)] = &[
    ("internal:privacy_policy", "/privacy"),
    ("internal:terms_of_service", "/terms"),
];

/// Maps an internal link token to its route. Any other target comes back untouched.
pub fn resolve_link(target: &str) -> &str {
    INTERNAL_ROUTES
        .iter()
        .find(|(token, _)| *token == target)
        .map_or(target, |(_, route)| *route)
}

fn markdown_options() -> Options {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    options.extension.autolink = true;
    options.render.hardbreaks = true;
    // raw html in a document is shown as text, link targets are left as written
    options.render.escape = true;
    options.render.unsafe_ = true;
    options
}

/// Renders a legal document body to HTML.
///
/// Single newlines are kept as line breaks, bare URLs and email addresses become links
/// and raw HTML in the source is shown as text.
pub fn render_markdown(content: &str) -> String {
    let source = if content.is_empty() {
        EMPTY_PLACEHOLDER
    } else {
        content
    };

    let arena = Arena::new();
    let options = markdown_options();
    let root = parse_document(&arena, source, &options);

    for node in root.descendants() {
        if let NodeValue::Link(ref mut link) = node.data.borrow_mut().value {
            let route = resolve_link(&link.url);
            if route != link.url {
                link.url = route.to_string();
            }
        }
    }

    let mut html = Vec::new();
    if let Err(e) = format_html(root, &options, &mut html) {
        tracing::error!("failed to render document: {e}");
    }
    String::from_utf8_lossy(&html).into_owned()
}
