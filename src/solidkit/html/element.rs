use super::render::{render_element, RenderOptions};
use crate::error::{require_name, Result};

/// A named node with optional text and ordered children.
///
/// Children are owned: pushing a node moves it into its parent, so a node can
/// never end up with two parents or inside itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlElement {
    name: String,
    text: Option<String>,
    children: Vec<HtmlElement>,
}

impl HtmlElement {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: require_name("node name", name)?,
            text: None,
            children: Vec::new(),
        })
    }

    // Callers guarantee `name` already passed validation.
    pub(super) fn named(name: String) -> Self {
        Self {
            name,
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Result<Self> {
        let mut element = Self::new(name)?;
        let text = text.into();
        if !text.is_empty() {
            element.text = Some(text);
        }
        Ok(element)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[HtmlElement] {
        &self.children
    }

    /// Appends `child` as the last child and returns it for further nesting.
    pub fn push(&mut self, child: HtmlElement) -> &mut HtmlElement {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    pub fn render_with(&self, options: &RenderOptions) -> String {
        let mut out = String::new();
        render_element(self, 0, options, &mut out);
        out
    }
}

impl std::fmt::Display for HtmlElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolidError;

    #[test]
    fn empty_text_is_treated_as_absent() {
        let li = HtmlElement::with_text("li", "").unwrap();
        assert_eq!(li.text(), None);
        assert_eq!(li.render(), "<li>\n</li>\n");
    }

    #[test]
    fn rejects_blank_names() {
        assert!(matches!(
            HtmlElement::new(" "),
            Err(SolidError::InvalidArgument(_))
        ));
        assert!(matches!(
            HtmlElement::with_text("", "orphan text"),
            Err(SolidError::InvalidArgument(_))
        ));
    }

    #[test]
    fn push_returns_the_new_child() {
        let mut ul = HtmlElement::new("ul").unwrap();
        ul.push(HtmlElement::new("li").unwrap())
            .push(HtmlElement::with_text("a", "link").unwrap());

        assert_eq!(ul.children().len(), 1);
        assert_eq!(ul.children()[0].children()[0].text(), Some("link"));
    }

    #[test]
    fn display_matches_render() {
        let mut p = HtmlElement::new("p").unwrap();
        p.push(HtmlElement::with_text("b", "bold").unwrap());
        assert_eq!(p.to_string(), p.render());
    }
}
