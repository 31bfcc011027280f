//! # Specification Filters
//!
//! Filtering criteria live in their own types instead of in the filter. A filter
//! that knows only about [`Specification`] never has to change when a new
//! criterion appears: adding "filter by name" means adding a `NameSpec`, not a
//! `filter_by_name` method (and then `filter_by_name_and_color`, and so on).
//!
//! ## Pieces
//!
//! - [`Specification`]: a predicate over `T` with a single `is_satisfied` method.
//! - Leaf specifications over [`Product`](crate::model::Product): [`ColorSpec`],
//!   [`SizeSpec`], [`NameSpec`].
//! - Combinators: [`AndSpec`], [`OrSpec`], [`NotSpec`] (generic, zero-cost) and
//!   [`AllOf`], [`AnyOf`] (boxed, for criteria only known at runtime).
//! - [`FnSpec`]: wraps a closure when a one-off predicate is all you need.
//! - [`Filter`] / [`BetterFilter`] and the free [`filter`] function apply a
//!   specification to a collection.
//!
//! ## Usage
//!
//! ```ignore
//! let medium_blue = ColorSpec::new(Color::Blue).and(SizeSpec::new(Size::Medium));
//! let hits: Vec<&Product> = filter(&products, &medium_blue).collect();
//! ```
//!
//! Filtering is lazy and order preserving: the iterator yields matches in the
//! order of the input and never duplicates or reorders items.

mod combinators;
mod product;

pub use combinators::{AllOf, AndSpec, AnyOf, FnSpec, NotSpec, OrSpec};
pub use product::{ColorSpec, NameSpec, SizeSpec};

/// A predicate over items of type `T`.
///
/// Implementations must be pure: the same item always gives the same answer.
pub trait Specification<T> {
    fn is_satisfied(&self, item: &T) -> bool;
}

impl<T, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

/// A type-erased specification, for composition decided at runtime.
pub type BoxedSpec<T> = Box<dyn Specification<T>>;

/// Fluent combinator methods, available on every specification.
pub trait SpecExt<T>: Specification<T> + Sized {
    /// Satisfied when both `self` and `other` are.
    fn and<O: Specification<T>>(self, other: O) -> AndSpec<Self, O> {
        AndSpec::new(self, other)
    }

    /// Satisfied when either `self` or `other` is.
    fn or<O: Specification<T>>(self, other: O) -> OrSpec<Self, O> {
        OrSpec::new(self, other)
    }

    /// Satisfied when `self` is not.
    fn not(self) -> NotSpec<Self> {
        NotSpec::new(self)
    }

    fn boxed(self) -> BoxedSpec<T>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<T, S: Specification<T>> SpecExt<T> for S {}

/// Applies a specification to a collection.
pub trait Filter<T> {
    fn filter<'a>(
        &self,
        items: &'a [T],
        spec: &'a dyn Specification<T>,
    ) -> Box<dyn Iterator<Item = &'a T> + 'a>;
}

/// Filters by asking the [`Specification`] about each item.
#[derive(Debug, Default, Clone, Copy)]
pub struct BetterFilter;

impl<T> Filter<T> for BetterFilter {
    fn filter<'a>(
        &self,
        items: &'a [T],
        spec: &'a dyn Specification<T>,
    ) -> Box<dyn Iterator<Item = &'a T> + 'a> {
        Box::new(filter(items, spec))
    }
}

/// Lazily yields the items satisfying `spec`, in input order.
///
/// Takes anything that iterates over references, so filters can be chained:
/// `filter(filter(&items, &a), &b)`.
pub fn filter<'a, T, I, S>(items: I, spec: &'a S) -> impl Iterator<Item = &'a T> + 'a
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: 'a,
    S: Specification<T> + ?Sized,
{
    items.into_iter().filter(move |item| spec.is_satisfied(item))
}
