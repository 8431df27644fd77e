//! Template types for typed variable injection.

use std::marker::PhantomData;

/// Trait for template variable sets.
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;
}

/// Template with typed variable injection.
///
/// Wraps an embedded `&'static str` and a marker for the variable set it
/// accepts, so a page cannot be rendered with the wrong variables.
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Greeting<'a> {
        name: &'a str,
    }

    impl TemplateVars for Greeting<'_> {
        fn apply(&self, content: &str) -> String {
            content.replace("__NAME__", self.name)
        }
    }

    #[test]
    fn test_render_replaces_placeholders() {
        const T: Template<Greeting<'static>> = Template::new("hello __NAME__!");
        assert_eq!(T.render(&Greeting { name: "world" }), "hello world!");
    }
}
