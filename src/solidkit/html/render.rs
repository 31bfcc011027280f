//! Indented tag serialization.
//!
//! ```text
//! <ul>
//!   <li>
//!     Hello
//!   </li>
//! </ul>
//! ```
//!
//! Depth-first, pre-order. Each tag sits on its own line at `indent_size * depth`
//! spaces; a node's text goes on the line after its opening tag, one level deeper.
//! Names and text are written verbatim: nothing is escaped.

use super::element::HtmlElement;
use crate::error::{Result, SolidError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_INDENT_SIZE: usize = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

impl std::fmt::Display for LineEnding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineEnding::Lf => write!(f, "lf"),
            LineEnding::Crlf => write!(f, "crlf"),
        }
    }
}

impl FromStr for LineEnding {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "lf" => Ok(LineEnding::Lf),
            "crlf" => Ok(LineEnding::Crlf),
            _ => Err(SolidError::invalid(format!(
                "Unknown line ending: {} (expected lf or crlf)",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    indent_size: usize,
    line_ending: LineEnding,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_size: DEFAULT_INDENT_SIZE,
            line_ending: LineEnding::Lf,
        }
    }
}

impl RenderOptions {
    pub fn new(indent_size: usize, line_ending: LineEnding) -> Result<Self> {
        if indent_size == 0 {
            return Err(SolidError::invalid("indent size must be at least 1"));
        }
        Ok(Self {
            indent_size,
            line_ending,
        })
    }

    pub fn indent_size(&self) -> usize {
        self.indent_size
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }
}

pub(crate) fn render_element(
    element: &HtmlElement,
    depth: usize,
    options: &RenderOptions,
    out: &mut String,
) {
    let newline = options.line_ending.as_str();
    let indent = " ".repeat(options.indent_size * depth);

    out.push_str(&indent);
    out.push('<');
    out.push_str(element.name());
    out.push('>');
    out.push_str(newline);

    if let Some(text) = element.text() {
        out.push_str(&" ".repeat(options.indent_size * (depth + 1)));
        out.push_str(text);
        out.push_str(newline);
    }

    for child in element.children() {
        render_element(child, depth + 1, options, out);
    }

    out.push_str(&indent);
    out.push_str("</");
    out.push_str(element.name());
    out.push('>');
    out.push_str(newline);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested() -> HtmlElement {
        let mut div = HtmlElement::new("div").unwrap();
        div.push(HtmlElement::with_text("p", "intro").unwrap())
            .push(HtmlElement::with_text("em", "note").unwrap());
        div
    }

    #[test]
    fn renders_nested_levels_with_two_space_indent() {
        let expected = "\
<div>
  <p>
    intro
    <em>
      note
    </em>
  </p>
</div>
";
        assert_eq!(nested().render(), expected);
    }

    #[test]
    fn honours_indent_size_and_crlf() {
        let options = RenderOptions::new(4, LineEnding::Crlf).unwrap();
        let expected = "<div>\r\n    <p>\r\n        intro\r\n        <em>\r\n            note\r\n        </em>\r\n    </p>\r\n</div>\r\n";
        assert_eq!(nested().render_with(&options), expected);
    }

    #[test]
    fn writes_names_and_text_verbatim() {
        let el = HtmlElement::with_text("x-tag", "a < b & c").unwrap();
        assert_eq!(el.render(), "<x-tag>\n  a < b & c\n</x-tag>\n");
    }

    #[test]
    fn zero_indent_is_rejected() {
        assert!(RenderOptions::new(0, LineEnding::Lf).is_err());
    }

    #[test]
    fn line_ending_parses() {
        assert_eq!("CRLF".parse::<LineEnding>().unwrap(), LineEnding::Crlf);
        assert_eq!(LineEnding::Lf.to_string(), "lf");
        assert!("cr".parse::<LineEnding>().is_err());
    }
}
