//! HTML rendering: embedded templates and page builders.

mod pages;
mod shell;
mod template;

pub use pages::{
    contact, feeds, home, not_found, post_detail, post_index, resume, series_index, series_posts,
    signal_boost,
};
pub use template::{Template, TemplateVars};
