//! Specifications built out of other specifications.
//!
//! Every combinator owns its children. The generic ones ([`AndSpec`], [`OrSpec`],
//! [`NotSpec`]) are resolved at compile time; [`AllOf`] and [`AnyOf`] hold boxed
//! children for criteria that are only known at runtime (e.g. parsed from CLI
//! flags).

use super::{BoxedSpec, Specification};

/// Satisfied iff both children are satisfied by the same item.
#[derive(Debug, Clone)]
pub struct AndSpec<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndSpec<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A: Specification<T>, B: Specification<T>> Specification<T> for AndSpec<A, B> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

/// Satisfied iff at least one child is satisfied.
#[derive(Debug, Clone)]
pub struct OrSpec<A, B> {
    first: A,
    second: B,
}

impl<A, B> OrSpec<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A: Specification<T>, B: Specification<T>> Specification<T> for OrSpec<A, B> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) || self.second.is_satisfied(item)
    }
}

/// Inverts its child.
#[derive(Debug, Clone)]
pub struct NotSpec<A> {
    inner: A,
}

impl<A> NotSpec<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }
}

impl<T, A: Specification<T>> Specification<T> for NotSpec<A> {
    fn is_satisfied(&self, item: &T) -> bool {
        !self.inner.is_satisfied(item)
    }
}

/// N-ary AND over boxed specifications. An empty `AllOf` accepts everything.
pub struct AllOf<T> {
    specs: Vec<BoxedSpec<T>>,
}

impl<T> AllOf<T> {
    pub fn new(specs: Vec<BoxedSpec<T>>) -> Self {
        Self { specs }
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<T> Specification<T> for AllOf<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.specs.iter().all(|spec| spec.is_satisfied(item))
    }
}

/// N-ary OR over boxed specifications. An empty `AnyOf` accepts nothing.
pub struct AnyOf<T> {
    specs: Vec<BoxedSpec<T>>,
}

impl<T> AnyOf<T> {
    pub fn new(specs: Vec<BoxedSpec<T>>) -> Self {
        Self { specs }
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<T> Specification<T> for AnyOf<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.specs.iter().any(|spec| spec.is_satisfied(item))
    }
}

/// Adapts a closure into a specification.
#[derive(Clone)]
pub struct FnSpec<F> {
    predicate: F,
}

impl<F> FnSpec<F> {
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<T, F: Fn(&T) -> bool> Specification<T> for FnSpec<F> {
    fn is_satisfied(&self, item: &T) -> bool {
        (self.predicate)(item)
    }
}
