//! # Product Catalogs
//!
//! The [`Catalog`] trait is where products come from. Commands only ever see the
//! trait, so tests run against [`InMemoryCatalog`] while the CLI may point at a
//! JSON file through [`JsonCatalog`].
//!
//! ## Catalog file format
//!
//! A JSON array of products, read-only:
//!
//! ```text
//! [
//!   { "name": "Apple", "color": "red",   "size": "small" },
//!   { "name": "Tree",  "color": "green", "size": "large" }
//! ]
//! ```
//!
//! Colors are `red`, `green`, `blue`; sizes are `small`, `medium`, `large`,
//! `huge`. Names must not be blank.

use crate::error::Result;
use crate::model::{Product, DEMO_PRODUCTS};
use std::fs;
use std::path::{Path, PathBuf};

/// Source of products for the filter commands.
pub trait Catalog {
    /// All products, in catalog order.
    fn products(&self) -> Result<Vec<Product>>;

    /// Short human-readable origin, used in log lines.
    fn source(&self) -> String;
}

impl<C: Catalog + ?Sized> Catalog for Box<C> {
    fn products(&self) -> Result<Vec<Product>> {
        (**self).products()
    }

    fn source(&self) -> String {
        (**self).source()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Apple (red, small), Tree (green, large), Honda (blue, medium).
    pub fn demo() -> Self {
        Self::new(DEMO_PRODUCTS.clone())
    }
}

impl Catalog for InMemoryCatalog {
    fn products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn source(&self) -> String {
        "in-memory catalog".to_string()
    }
}

/// Reads products from a JSON file on every call.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Catalog for JsonCatalog {
    fn products(&self) -> Result<Vec<Product>> {
        let content = fs::read_to_string(&self.path)?;
        let products: Vec<Product> = serde_json::from_str(&content)?;
        Ok(products)
    }

    fn source(&self) -> String {
        self.path.display().to_string()
    }
}
