use colored::Colorize;
use solidkit::api::{CmdMessage, MessageLevel};
use solidkit::config::{SolidConfig, CONFIG_KEYS};
use solidkit::error::Result;
use solidkit::model::Product;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: usize = 2;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_products(products: &[Product]) {
    print!("{}", render_product_table(products));
}

pub(super) fn print_products_json(products: &[Product]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(products)?);
    Ok(())
}

pub(super) fn print_config(config: &SolidConfig) {
    for key in CONFIG_KEYS {
        let value = config.get(key).unwrap_or_default();
        println!("{} = {}", key, value);
    }
}

/// Name, color and size columns, padded by display width.
fn render_product_table(products: &[Product]) -> String {
    let name_width = products
        .iter()
        .map(|p| p.name().width())
        .max()
        .unwrap_or(0);
    let color_width = products
        .iter()
        .map(|p| p.color().to_string().width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for product in products {
        let name = product.name();
        let color = product.color().to_string();
        out.push_str(name);
        out.push_str(&" ".repeat(name_width - name.width() + COLUMN_GAP));
        out.push_str(&color);
        out.push_str(&" ".repeat(color_width - color.width() + COLUMN_GAP));
        out.push_str(&product.size().to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use solidkit::model::{Color, Size};

    #[test]
    fn table_aligns_columns() {
        let products = vec![
            Product::new("Apple", Color::Red, Size::Small).unwrap(),
            Product::new("Honda", Color::Blue, Size::Medium).unwrap(),
            Product::new("Fig", Color::Green, Size::Large).unwrap(),
        ];
        assert_eq!(
            render_product_table(&products),
            "Apple  red    small\nHonda  blue   medium\nFig    green  large\n"
        );
    }

    #[test]
    fn table_uses_display_width() {
        let products = vec![
            Product::new("日本", Color::Red, Size::Small).unwrap(),
            Product::new("abc", Color::Red, Size::Huge).unwrap(),
        ];
        assert_eq!(
            render_product_table(&products),
            "日本  red  small\nabc   red  huge\n"
        );
    }

    #[test]
    fn empty_table_is_empty() {
        assert_eq!(render_product_table(&[]), "");
    }
}
