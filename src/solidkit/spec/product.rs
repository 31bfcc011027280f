//! Leaf specifications over [`Product`].

use super::Specification;
use crate::error::{require_name, Result};
use crate::model::{Color, Product, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpec {
    color: Color,
}

impl ColorSpec {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpec {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color() == self.color
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    size: Size,
}

impl SizeSpec {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpec {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size() == self.size
    }
}

/// Case-insensitive substring match on the product name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSpec {
    needle: String,
}

impl NameSpec {
    pub fn new(needle: impl Into<String>) -> Result<Self> {
        let needle = require_name("name filter", needle)?;
        Ok(Self {
            needle: needle.to_lowercase(),
        })
    }
}

impl Specification<Product> for NameSpec {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.name().to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolidError;

    fn honda() -> Product {
        Product::new("Honda Civic", Color::Blue, Size::Medium).unwrap()
    }

    #[test]
    fn color_spec_matches_only_its_color() {
        assert!(ColorSpec::new(Color::Blue).is_satisfied(&honda()));
        assert!(!ColorSpec::new(Color::Red).is_satisfied(&honda()));
    }

    #[test]
    fn size_spec_matches_only_its_size() {
        assert!(SizeSpec::new(Size::Medium).is_satisfied(&honda()));
        assert!(!SizeSpec::new(Size::Huge).is_satisfied(&honda()));
    }

    #[test]
    fn name_spec_ignores_case() {
        assert!(NameSpec::new("civic").unwrap().is_satisfied(&honda()));
        assert!(NameSpec::new("HONDA").unwrap().is_satisfied(&honda()));
        assert!(!NameSpec::new("tree").unwrap().is_satisfied(&honda()));
    }

    #[test]
    fn name_spec_rejects_empty_needle() {
        assert!(matches!(
            NameSpec::new(""),
            Err(SolidError::InvalidArgument(_))
        ));
    }
}
