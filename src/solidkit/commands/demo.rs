//! The guided walkthrough behind `solidkit demo`.
//!
//! Filters the catalog the way the open-closed example does (green products, then
//! medium blue ones through an AND combinator), then builds the `ul`/`li` list twice:
//! once with separate calls and once with chained ones.

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::html::{HtmlBuilder, RenderOptions};
use crate::model::{Color, Size};
use crate::spec::{filter, ColorSpec, SizeSpec, SpecExt};

pub fn run<C: Catalog>(catalog: &C, options: &RenderOptions) -> Result<CmdResult> {
    let products = catalog.products()?;
    let mut result = CmdResult::default();

    result.add_message(CmdMessage::info("Green products:"));
    let green = ColorSpec::new(Color::Green);
    for product in filter(&products, &green) {
        result.add_message(CmdMessage::success(format!(
            " - {} is green",
            product.name()
        )));
    }

    result.add_message(CmdMessage::info("Medium blue products:"));
    let medium_blue = ColorSpec::new(Color::Blue).and(SizeSpec::new(Size::Medium));
    for product in filter(&products, &medium_blue) {
        result.add_message(CmdMessage::success(format!(
            " - {} is medium and blue",
            product.name()
        )));
    }

    result.add_message(CmdMessage::info("HTML builder:"));
    let mut builder = HtmlBuilder::new("ul")?;
    builder.add_child("li", "Hello")?;
    builder.add_child("li", "World")?;
    // Messages are printed one per line; drop the tree's own trailing newline.
    result.add_message(CmdMessage::success(
        builder.render_with(options).trim_end(),
    ));

    result.add_message(CmdMessage::info("Fluent HTML builder:"));
    builder.clear();
    builder.add_child("li", "Hello")?.add_child("li", "World")?;
    let rendered = builder.render_with(options);
    result.add_message(CmdMessage::success(rendered.trim_end()));

    Ok(result.with_rendered(rendered))
}
