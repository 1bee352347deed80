//! Patterns built from other patterns or from a comparison operand.
//!
//! - [`Then`]: sequential refinement. The second pattern sees what the
//!   first one unwrapped (`as_::<i32>() | Wildcard.lt(100)`).
//! - [`Equals`] / [`Compare`]: relational tests anchored on `Wildcard`.
//!   `Wildcard.lt(v)` tests `x < v`; `val(v).lt(Wildcard)` tests `v < x`.
//!   Operand order is preserved because `PartialOrd<Rhs>` need not be
//!   symmetric.

use std::marker::PhantomData;

use crate::{Pattern, Wildcard};

// Then

/// `first`, then `second` on whatever `first` unwrapped.
///
/// Testing the condition unwraps a clone of the scrutinee, so refining an
/// owned value with heap payloads clones it once per test. Matching through
/// a reference keeps that clone a pointer copy.
#[derive(Clone, Copy, Debug)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Then<A, B> {
    /// Chain `second` after `first`. Same as `first.then(second)`.
    pub fn new(first: A, second: B) -> Self {
        Then { first, second }
    }
}

impl<T, A, B> Pattern<T> for Then<A, B>
where
    T: Clone,
    A: Pattern<T>,
    B: Pattern<A::Output>,
{
    type Output = B::Output;

    /// Short-circuits: `second` is never consulted when `first` fails, and
    /// only ever sees a value `first` accepted. Clones `value` once when
    /// `first` holds.
    fn matches(&self, value: &T) -> bool {
        self.first.matches(value) && self.second.matches(&self.first.unwrap(value.clone()))
    }

    fn unwrap(&self, value: T) -> Self::Output {
        self.second.unwrap(self.first.unwrap(value))
    }
}

// Relational

/// The scrutinee is the left operand: `x op v`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrutineeLeft;

/// The scrutinee is the right operand: `v op x`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrutineeRight;

/// Ordering operators accepted by [`Compare`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    Lt,
    Gt,
    Le,
    Ge,
}

impl Relation {
    #[inline]
    fn holds<L, R>(self, lhs: &L, rhs: &R) -> bool
    where
        L: PartialOrd<R> + ?Sized,
        R: ?Sized,
    {
        match self {
            Relation::Lt => PartialOrd::lt(lhs, rhs),
            Relation::Gt => PartialOrd::gt(lhs, rhs),
            Relation::Le => PartialOrd::le(lhs, rhs),
            Relation::Ge => PartialOrd::ge(lhs, rhs),
        }
    }
}

/// `==` or `!=` against a fixed operand.
#[derive(Clone, Copy, Debug)]
pub struct Equals<V, S> {
    operand: V,
    negated: bool,
    side: PhantomData<S>,
}

impl<V, S> Equals<V, S> {
    fn new(operand: V, negated: bool) -> Self {
        Equals {
            operand,
            negated,
            side: PhantomData,
        }
    }
}

impl<T, V> Pattern<T> for Equals<V, ScrutineeLeft>
where
    T: PartialEq<V>,
{
    type Output = T;

    #[inline]
    fn matches(&self, value: &T) -> bool {
        (*value == self.operand) != self.negated
    }

    #[inline]
    fn unwrap(&self, value: T) -> T {
        value
    }
}

impl<T, V> Pattern<T> for Equals<V, ScrutineeRight>
where
    V: PartialEq<T>,
{
    type Output = T;

    #[inline]
    fn matches(&self, value: &T) -> bool {
        (self.operand == *value) != self.negated
    }

    #[inline]
    fn unwrap(&self, value: T) -> T {
        value
    }
}

/// `<`, `>`, `<=` or `>=` against a fixed operand.
#[derive(Clone, Copy, Debug)]
pub struct Compare<V, S> {
    relation: Relation,
    operand: V,
    side: PhantomData<S>,
}

impl<V, S> Compare<V, S> {
    fn new(relation: Relation, operand: V) -> Self {
        Compare {
            relation,
            operand,
            side: PhantomData,
        }
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }
}

impl<T, V> Pattern<T> for Compare<V, ScrutineeLeft>
where
    T: PartialOrd<V>,
{
    type Output = T;

    #[inline]
    fn matches(&self, value: &T) -> bool {
        self.relation.holds(value, &self.operand)
    }

    #[inline]
    fn unwrap(&self, value: T) -> T {
        value
    }
}

impl<T, V> Pattern<T> for Compare<V, ScrutineeRight>
where
    V: PartialOrd<T>,
{
    type Output = T;

    #[inline]
    fn matches(&self, value: &T) -> bool {
        self.relation.holds(&self.operand, value)
    }

    #[inline]
    fn unwrap(&self, value: T) -> T {
        value
    }
}

/// Relational patterns with the scrutinee on the left.
#[allow(clippy::should_implement_trait)]
impl Wildcard {
    /// `x == operand`
    pub fn eq<V>(self, operand: V) -> Equals<V, ScrutineeLeft> {
        Equals::new(operand, false)
    }

    /// `x != operand`
    pub fn ne<V>(self, operand: V) -> Equals<V, ScrutineeLeft> {
        Equals::new(operand, true)
    }

    /// `x < operand`
    pub fn lt<V>(self, operand: V) -> Compare<V, ScrutineeLeft> {
        Compare::new(Relation::Lt, operand)
    }

    /// `x > operand`
    pub fn gt<V>(self, operand: V) -> Compare<V, ScrutineeLeft> {
        Compare::new(Relation::Gt, operand)
    }

    /// `x <= operand`
    pub fn le<V>(self, operand: V) -> Compare<V, ScrutineeLeft> {
        Compare::new(Relation::Le, operand)
    }

    /// `x >= operand`
    pub fn ge<V>(self, operand: V) -> Compare<V, ScrutineeLeft> {
        Compare::new(Relation::Ge, operand)
    }
}

/// A comparison operand waiting for `Wildcard` on its right.
#[derive(Clone, Copy, Debug)]
pub struct Operand<V>(V);

/// Put `operand` on the left of a relational pattern: `val(0).lt(Wildcard)`.
pub fn val<V>(operand: V) -> Operand<V> {
    Operand(operand)
}

#[allow(clippy::should_implement_trait)]
impl<V> Operand<V> {
    /// `operand == x`
    pub fn eq(self, _scrutinee: Wildcard) -> Equals<V, ScrutineeRight> {
        Equals::new(self.0, false)
    }

    /// `operand != x`
    pub fn ne(self, _scrutinee: Wildcard) -> Equals<V, ScrutineeRight> {
        Equals::new(self.0, true)
    }

    /// `operand < x`
    pub fn lt(self, _scrutinee: Wildcard) -> Compare<V, ScrutineeRight> {
        Compare::new(Relation::Lt, self.0)
    }

    /// `operand > x`
    pub fn gt(self, _scrutinee: Wildcard) -> Compare<V, ScrutineeRight> {
        Compare::new(Relation::Gt, self.0)
    }

    /// `operand <= x`
    pub fn le(self, _scrutinee: Wildcard) -> Compare<V, ScrutineeRight> {
        Compare::new(Relation::Le, self.0)
    }

    /// `operand >= x`
    pub fn ge(self, _scrutinee: Wildcard) -> Compare<V, ScrutineeRight> {
        Compare::new(Relation::Ge, self.0)
    }
}

pattern_ops!(Then<A, B>, Equals<V, S>, Compare<V, S>);
