//! Markdown to HTML conversion using pulldown-cmark.
//!
//! The [`MarkdownRenderer`] trait is the seam between content loading and
//! the markdown library: loaders take `&dyn MarkdownRenderer`, so tests can
//! substitute a fake that emits predictable HTML.

use pulldown_cmark::{Options, Parser, html};

/// Options for markdown conversion
#[derive(Debug, Clone, Default)]
pub struct MarkdownOptions {
    /// Enable tables extension
    pub tables: bool,
    /// Enable footnotes extension
    pub footnotes: bool,
    /// Enable strikethrough extension
    pub strikethrough: bool,
    /// Enable task lists extension
    pub task_lists: bool,
    /// Enable heading attributes extension (e.g., `# Heading {#custom-id}`)
    pub heading_attributes: bool,
}

impl MarkdownOptions {
    /// Create options with all extensions enabled
    pub fn all() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            task_lists: true,
            heading_attributes: true,
        }
    }

    /// Convert to pulldown-cmark Options
    fn to_pulldown_options(&self) -> Options {
        let mut opts = Options::empty();
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.footnotes {
            opts.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.task_lists {
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        if self.heading_attributes {
            opts.insert(Options::ENABLE_HEADING_ATTRIBUTES);
        }
        opts
    }
}

/// Converts a markdown body to an HTML fragment.
pub trait MarkdownRenderer {
    fn render(&self, markdown: &str) -> String;
}

/// pulldown-cmark backed renderer.
pub struct CmarkRenderer {
    options: MarkdownOptions,
}

impl CmarkRenderer {
    pub fn new(options: MarkdownOptions) -> Self {
        Self { options }
    }

    /// Renderer with all markdown extensions enabled.
    pub fn with_all_extensions() -> Self {
        Self::new(MarkdownOptions::all())
    }
}

impl MarkdownRenderer for CmarkRenderer {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options.to_pulldown_options());
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_paragraph() {
        let renderer = CmarkRenderer::with_all_extensions();
        assert_eq!(renderer.render("Hello world"), "<p>Hello world</p>\n");
    }

    #[test]
    fn test_heading() {
        let renderer = CmarkRenderer::with_all_extensions();
        let html = renderer.render("# Title");
        assert!(html.contains("<h1>Title</h1>"));
    }

    #[test]
    fn test_link() {
        let renderer = CmarkRenderer::with_all_extensions();
        let html = renderer.render("[Link](https://example.com)");
        assert!(html.contains("<a href=\"https://example.com\">Link</a>"));
    }

    #[test]
    fn test_strikethrough_extension() {
        let with_ext = CmarkRenderer::with_all_extensions();
        assert!(with_ext.render("~~gone~~").contains("<del>gone</del>"));

        let without_ext = CmarkRenderer::new(MarkdownOptions::default());
        assert!(!without_ext.render("~~gone~~").contains("<del>"));
    }

    #[test]
    fn test_table_extension() {
        let renderer = CmarkRenderer::with_all_extensions();
        let html = renderer.render("| a | b |\n| - | - |\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_nested_list() {
        let renderer = CmarkRenderer::with_all_extensions();
        let html = renderer.render("- Item 1\n  - Nested\n- Item 2");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>Item 2</li>"));
    }
}
