use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use tracing::debug;

pub fn run<C: Catalog>(catalog: &C) -> Result<CmdResult> {
    let products = catalog.products()?;
    debug!(source = %catalog.source(), count = products.len(), "listed catalog");

    let mut result = CmdResult::default();
    if products.is_empty() {
        result.add_message(CmdMessage::info("The catalog is empty."));
    }
    Ok(result.with_listed_products(products))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;

    #[test]
    fn lists_every_product() {
        let result = run(&InMemoryCatalog::demo()).unwrap();
        assert_eq!(result.listed_products.len(), 3);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_catalog_says_so() {
        let result = run(&InMemoryCatalog::default()).unwrap();
        assert!(result.listed_products.is_empty());
        assert_eq!(result.messages[0].content, "The catalog is empty.");
    }
}
