use crate::error::{require_name, Result, SolidError};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The built-in catalog used when no catalog file is configured.
pub static DEMO_PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product::known("Apple", Color::Red, Size::Small),
        Product::known("Tree", Color::Green, Size::Large),
        Product::known("Honda", Color::Blue, Size::Medium),
    ]
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Green => write!(f, "green"),
            Color::Blue => write!(f, "blue"),
        }
    }
}

impl FromStr for Color {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            _ => Err(SolidError::invalid(format!("Unknown color: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
    Huge,
}

impl Size {
    pub const ALL: [Size; 4] = [Size::Small, Size::Medium, Size::Large, Size::Huge];
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Size::Small => write!(f, "small"),
            Size::Medium => write!(f, "medium"),
            Size::Large => write!(f, "large"),
            Size::Huge => write!(f, "huge"),
        }
    }
}

impl FromStr for Size {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            "huge" => Ok(Size::Huge),
            _ => Err(SolidError::invalid(format!("Unknown size: {}", s))),
        }
    }
}

/// A catalog item. Fields are read-only once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    name: String,
    color: Color,
    size: Size,
}

impl Product {
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Result<Self> {
        Ok(Self {
            name: require_name("product name", name)?,
            color,
            size,
        })
    }

    fn known(name: &'static str, color: Color, size: Size) -> Self {
        Self {
            name: name.to_string(),
            color,
            size,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

// Deserialization goes through `Product::new` so file input gets the same checks.
#[derive(Deserialize)]
struct ProductRecord {
    name: String,
    color: Color,
    size: Size,
}

impl TryFrom<ProductRecord> for Product {
    type Error = SolidError;

    fn try_from(record: ProductRecord) -> Result<Self> {
        Product::new(record.name, record.color, record.size)
    }
}
