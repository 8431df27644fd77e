//! The outer page shell shared by every HTML route.

use super::template::{Template, TemplateVars};
use crate::config::SiteConfig;
use crate::utils::html::escape;

/// Variables for shell.html.
pub struct ShellVars<'a> {
    /// Document title, already combined with the site title.
    pub title: &'a str,
    pub site_title: &'a str,
    pub lang: &'a str,
    /// Pre-rendered inner HTML. Inserted verbatim.
    pub content: &'a str,
    pub copyright: &'a str,
}

impl TemplateVars for ShellVars<'_> {
    fn apply(&self, content: &str) -> String {
        content
            .replace("__LANG__", &escape(self.lang))
            .replace("__TITLE__", &escape(self.title))
            .replace("__SITE_TITLE__", &escape(self.site_title))
            .replace("__COPYRIGHT__", &escape(self.copyright))
            .replace("__CONTENT__", self.content)
    }
}

/// Page shell wrapping all rendered content.
pub const SHELL_HTML: Template<ShellVars<'static>> = Template::new(include_str!("shell.html"));

/// Wrap inner HTML in the shell, deriving the document title.
pub fn wrap(config: &SiteConfig, page_title: &str, content: &str) -> String {
    let site_title = &config.site.title;
    let title = if page_title.is_empty() {
        site_title.clone()
    } else {
        format!("{page_title} - {site_title}")
    };

    SHELL_HTML.render(&ShellVars {
        title: &title,
        site_title,
        lang: &config.site.language,
        content,
        copyright: &config.site.copyright,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.site.title = "My Site".to_string();
        config.site.copyright = "All mine".to_string();
        config
    }

    #[test]
    fn test_wrap_combines_titles() {
        let html = wrap(&make_config(), "Blog", "<p>x</p>");
        assert!(html.contains("<title>Blog - My Site</title>"));
        assert!(html.contains("<p>x</p>"));
        assert!(html.contains("All mine"));
    }

    #[test]
    fn test_wrap_empty_page_title_uses_site_title() {
        let html = wrap(&make_config(), "", "<p>x</p>");
        assert!(html.contains("<title>My Site</title>"));
    }

    #[test]
    fn test_wrap_escapes_title() {
        let html = wrap(&make_config(), "a <b> & c", "");
        assert!(html.contains("a &lt;b&gt; &amp; c - My Site"));
    }

    #[test]
    fn test_no_placeholders_survive() {
        let html = wrap(&make_config(), "T", "<p>body</p>");
        assert!(!html.contains("__"));
    }
}
