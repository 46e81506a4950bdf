//! Description Markdown
//!
//! Renders task descriptions for the detail panel preview. Raw HTML in the
//! source is shown as text, never injected, and script-bearing link targets
//! are blanked.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

const BLOCKED_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS | Options::ENABLE_TABLES
}

/// Browsers ignore ASCII whitespace and control characters inside a scheme
fn is_blocked_url(url: &str) -> bool {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect::<String>()
        .to_ascii_lowercase();
    BLOCKED_SCHEMES.iter().any(|scheme| normalized.starts_with(scheme))
}

/// Render a description to HTML
pub fn render_description(text: &str) -> String {
    let events = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) if is_blocked_url(&dest_url) => {
            Event::Start(Tag::Link { link_type, dest_url: CowStr::Borrowed(""), title, id })
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) if is_blocked_url(&dest_url) => {
            Event::Start(Tag::Image { link_type, dest_url: CowStr::Borrowed(""), title, id })
        }
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strikethrough() {
        let html = render_description("~~old~~ new");
        assert!(html.contains("<del>old</del>"));
    }

    #[test]
    fn test_task_list() {
        let html = render_description("- [x] outline\n- [ ] draft");
        assert!(html.contains("checkbox"));
        assert!(html.contains("outline"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_description("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_script_links_are_blanked() {
        let html = render_description("[x](javascript:alert(1)) and [y](JavaScript:void(0))");
        assert!(!html.to_ascii_lowercase().contains("javascript:"));
        assert!(html.contains(r#"<a href="">x</a>"#));
        assert!(html.contains(r#"<a href="">y</a>"#));
    }

    #[test]
    fn test_ordinary_links_survive() {
        let html = render_description("[docs](https://example.com/page)");
        assert!(html.contains(r#"<a href="https://example.com/page">docs</a>"#));
    }

    #[test]
    fn test_blocked_scheme_detection() {
        assert!(is_blocked_url("javascript:alert(1)"));
        assert!(is_blocked_url(" JAVA\tSCRIPT:alert(1)"));
        assert!(is_blocked_url("data:text/html,<b>hi</b>"));
        assert!(!is_blocked_url("https://example.com"));
        assert!(!is_blocked_url("notes/javascript:guide"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(render_description(""), "");
    }
}
