use super::element::HtmlElement;
use super::render::RenderOptions;
use crate::error::Result;

/// Fluent builder for an [`HtmlElement`] tree.
///
/// The builder owns the root. Mutating calls return `&mut Self` inside a
/// `Result`, so a bad name fails at the call that passed it:
///
/// ```ignore
/// let mut b = HtmlBuilder::new("ul")?;
/// b.add_child("li", "Hello")?.add_child("li", "World")?;
/// print!("{}", b);
/// ```
#[derive(Debug, Clone)]
pub struct HtmlBuilder {
    root_name: String,
    root: HtmlElement,
}

impl HtmlBuilder {
    pub fn new(root_name: impl Into<String>) -> Result<Self> {
        let root = HtmlElement::new(root_name)?;
        Ok(Self {
            root_name: root.name().to_string(),
            root,
        })
    }

    /// Appends a `name`/`text` node as the last child of the root.
    pub fn add_child(
        &mut self,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<&mut Self> {
        self.root.push(HtmlElement::with_text(name, text)?);
        Ok(self)
    }

    /// Like [`add_child`](Self::add_child), then hands the new node to `build`
    /// so it can get children of its own.
    pub fn add_child_with<F>(
        &mut self,
        name: impl Into<String>,
        text: impl Into<String>,
        build: F,
    ) -> Result<&mut Self>
    where
        F: FnOnce(&mut ElementBuilder<'_>) -> Result<()>,
    {
        let mut child = HtmlElement::with_text(name, text)?;
        build(&mut ElementBuilder {
            element: &mut child,
        })?;
        self.root.push(child);
        Ok(self)
    }

    /// Drops every child: the root starts over, empty, with its original name.
    pub fn clear(&mut self) {
        self.root = HtmlElement::named(self.root_name.clone());
    }

    pub fn root(&self) -> &HtmlElement {
        &self.root
    }

    pub fn build(self) -> HtmlElement {
        self.root
    }

    pub fn render(&self) -> String {
        self.root.render()
    }

    pub fn render_with(&self, options: &RenderOptions) -> String {
        self.root.render_with(options)
    }
}

impl std::fmt::Display for HtmlBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Scoped access to a node under construction, handed out by
/// [`HtmlBuilder::add_child_with`].
pub struct ElementBuilder<'a> {
    element: &'a mut HtmlElement,
}

impl ElementBuilder<'_> {
    pub fn add_child(
        &mut self,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<&mut Self> {
        self.element.push(HtmlElement::with_text(name, text)?);
        Ok(self)
    }

    pub fn add_child_with<F>(
        &mut self,
        name: impl Into<String>,
        text: impl Into<String>,
        build: F,
    ) -> Result<&mut Self>
    where
        F: FnOnce(&mut ElementBuilder<'_>) -> Result<()>,
    {
        let mut child = HtmlElement::with_text(name, text)?;
        build(&mut ElementBuilder {
            element: &mut child,
        })?;
        self.element.push(child);
        Ok(self)
    }
}
