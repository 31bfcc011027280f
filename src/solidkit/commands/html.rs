use crate::commands::CmdResult;
use crate::error::{Result, SolidError};
use crate::html::{HtmlBuilder, RenderOptions};
use std::str::FromStr;
use tracing::debug;

/// A child given on the command line as `name=text`, or just `name`.
///
/// The name is kept verbatim, like the root name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildArg {
    pub name: String,
    pub text: String,
}

impl FromStr for ChildArg {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, text) = s.split_once('=').unwrap_or((s, ""));
        if name.trim().is_empty() {
            return Err(SolidError::invalid(format!(
                "Invalid child {:?}: expected name=text or name",
                s
            )));
        }
        Ok(ChildArg {
            name: name.to_string(),
            text: text.to_string(),
        })
    }
}

pub fn run(root: &str, children: &[ChildArg], options: &RenderOptions) -> Result<CmdResult> {
    let mut builder = HtmlBuilder::new(root)?;
    for child in children {
        builder.add_child(child.name.as_str(), child.text.as_str())?;
    }

    let rendered = builder.render_with(options);
    debug!(
        root,
        children = children.len(),
        indent = options.indent_size(),
        "rendered tree"
    );
    Ok(CmdResult::default().with_rendered(rendered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::LineEnding;

    #[test]
    fn parses_name_and_text() {
        let child: ChildArg = "li=Hello world".parse().unwrap();
        assert_eq!(child.name, "li");
        assert_eq!(child.text, "Hello world");
    }

    #[test]
    fn text_may_contain_equals_signs() {
        let child: ChildArg = "code=a=b".parse().unwrap();
        assert_eq!(child.name, "code");
        assert_eq!(child.text, "a=b");
    }

    #[test]
    fn bare_name_has_no_text() {
        let child: ChildArg = "hr".parse().unwrap();
        assert_eq!(child.name, "hr");
        assert_eq!(child.text, "");
    }

    #[test]
    fn rejects_missing_name() {
        assert!("=orphan".parse::<ChildArg>().is_err());
        assert!("".parse::<ChildArg>().is_err());
        assert!("  =text".parse::<ChildArg>().is_err());
    }

    #[test]
    fn renders_children_in_order() {
        let children: Vec<ChildArg> =
            vec!["li=Hello".parse().unwrap(), "li=World".parse().unwrap()];
        let result = run("ul", &children, &RenderOptions::default()).unwrap();
        assert_eq!(
            result.rendered.as_deref(),
            Some("<ul>\n  <li>\n    Hello\n  </li>\n  <li>\n    World\n  </li>\n</ul>\n")
        );
    }

    #[test]
    fn respects_render_options() {
        let options = RenderOptions::new(1, LineEnding::Lf).unwrap();
        let children: Vec<ChildArg> = vec!["li=x".parse().unwrap()];
        let result = run("ol", &children, &options).unwrap();
        assert_eq!(
            result.rendered.as_deref(),
            Some("<ol>\n <li>\n  x\n </li>\n</ol>\n")
        );
    }

    #[test]
    fn root_and_child_names_are_both_verbatim() {
        let children: Vec<ChildArg> = vec![" li=x".parse().unwrap()];
        let result = run(" ul", &children, &RenderOptions::default()).unwrap();
        assert_eq!(
            result.rendered.as_deref(),
            Some("< ul>\n  < li>\n    x\n  </ li>\n</ ul>\n")
        );
    }

    #[test]
    fn blank_root_fails() {
        assert!(run(" ", &[], &RenderOptions::default()).is_err());
    }
}
