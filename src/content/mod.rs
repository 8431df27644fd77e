//! Content model: front matter parsing, post loading, and collections.

mod error;
mod frontmatter;
mod loader;
mod post;
mod store;

pub use error::{FrontMatterError, LoadError};
pub use frontmatter::FrontMatter;
pub use loader::load_posts;
pub use post::Post;
pub use store::Posts;

#[cfg(test)]
pub use post::test_post;
