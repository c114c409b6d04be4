//! Markdown to HTML conversion for note bodies.

use pulldown_cmark::{Options, Parser, html};

/// Renders a note body from markdown to an HTML fragment.
///
/// Tables, footnotes, strikethrough, and task lists are enabled on top
/// of CommonMark. The detail template inserts the result with `|safe`,
/// so raw note text must never reach the page without going through
/// this function first.
///
/// # Example
///
/// ```
/// use jot::web::markdown_to_html;
///
/// let html = markdown_to_html("A note with **emphasis**.");
/// assert!(html.contains("<strong>emphasis</strong>"));
/// ```
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
