use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Color, Product, Size};
use crate::spec::{
    filter, AllOf, AnyOf, BoxedSpec, ColorSpec, NameSpec, NotSpec, SizeSpec, SpecExt,
};
use tracing::debug;

/// How the individual criteria are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Every criterion must hold (AND).
    #[default]
    All,
    /// At least one criterion must hold (OR).
    Any,
}

/// Filter criteria as they arrive from a UI: one leaf specification per entry.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    pub colors: Vec<Color>,
    pub sizes: Vec<Size>,
    pub name: Option<String>,
    pub mode: MatchMode,
    pub negate: bool,
}

impl Criteria {
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.sizes.is_empty() && self.name.is_none()
    }

    /// Builds the combined specification.
    ///
    /// With no criteria at all, `All` matches every product and `Any` matches none.
    pub fn to_spec(&self) -> Result<BoxedSpec<Product>> {
        let mut leaves: Vec<BoxedSpec<Product>> = Vec::new();
        leaves.extend(self.colors.iter().map(|c| ColorSpec::new(*c).boxed()));
        leaves.extend(self.sizes.iter().map(|s| SizeSpec::new(*s).boxed()));
        if let Some(name) = &self.name {
            leaves.push(NameSpec::new(name.clone())?.boxed());
        }

        let combined: BoxedSpec<Product> = match self.mode {
            MatchMode::All => AllOf::new(leaves).boxed(),
            MatchMode::Any => AnyOf::new(leaves).boxed(),
        };

        if self.negate {
            Ok(NotSpec::new(combined).boxed())
        } else {
            Ok(combined)
        }
    }

    /// One-line summary for logs and messages, e.g. `color=blue AND size=medium`.
    pub fn describe(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        parts.extend(self.colors.iter().map(|c| format!("color={}", c)));
        parts.extend(self.sizes.iter().map(|s| format!("size={}", s)));
        if let Some(name) = &self.name {
            parts.push(format!("name~{}", name));
        }

        let joiner = match self.mode {
            MatchMode::All => " AND ",
            MatchMode::Any => " OR ",
        };
        let body = if parts.is_empty() {
            match self.mode {
                MatchMode::All => "everything".to_string(),
                MatchMode::Any => "nothing".to_string(),
            }
        } else {
            parts.join(joiner)
        };

        if self.negate {
            format!("NOT ({})", body)
        } else {
            body
        }
    }
}

pub fn run<C: Catalog>(catalog: &C, criteria: &Criteria) -> Result<CmdResult> {
    let spec = criteria.to_spec()?;
    let products = catalog.products()?;

    let matched: Vec<Product> = filter(&products, &spec).cloned().collect();
    debug!(
        criteria = %criteria.describe(),
        source = %catalog.source(),
        total = products.len(),
        matched = matched.len(),
        "filtered catalog"
    );

    let mut result = CmdResult::default();
    if criteria.is_empty() {
        result.add_message(CmdMessage::info("No criteria given."));
    }
    if matched.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No products match {}.",
            criteria.describe()
        )));
    }
    Ok(result.with_listed_products(matched))
}
