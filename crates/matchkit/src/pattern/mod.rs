//! The `Pattern` abstraction and its unconditional forms.
//!
//! A pattern is a (condition, unwrap) pair over a candidate value:
//!
//! | Kind | Condition | Unwrap |
//! |------|-----------|--------|
//! | `Wildcard` | always true | identity |
//! | predicate `Fn(&T) -> bool` | the predicate | identity |
//! | raw value (`3`, `"abc"`, `Some(1)`, ...) | `candidate == value` | identity |
//! | extractors, combinators | see their modules | narrowing |
//!
//! Raw values and predicates are patterns in their own right, so every
//! position that takes a pattern also takes a literal or a closure. Scalars,
//! strings and `Option`s of them are built in; other types opt in with
//! [`values!`](crate::values). `when`
//! wraps any of them in a crate-local type so chaining methods become
//! available on it.

use std::ops::BitOr;

/// A structural test plus the value transformation performed on success.
///
/// `unwrap` is only defined for values `matches` accepted; callers must
/// test first. Implementations are pure apart from whatever a wrapped user
/// predicate does.
pub trait Pattern<T> {
    /// What `unwrap` produces and the next stage receives.
    type Output;

    /// Whether `value` satisfies this pattern.
    fn matches(&self, value: &T) -> bool;

    /// Narrow or transform an accepted value.
    fn unwrap(&self, value: T) -> Self::Output;
}

/// Matches anything and passes it through untouched.
///
/// Also the anchor for relational patterns (`Wildcard.lt(100)`).
#[derive(Clone, Copy, Debug, Default)]
pub struct Wildcard;

/// Shared `Wildcard` instance.
pub const WILDCARD: Wildcard = Wildcard;

impl<T> Pattern<T> for Wildcard {
    type Output = T;

    #[inline]
    fn matches(&self, _value: &T) -> bool {
        true
    }

    #[inline]
    fn unwrap(&self, value: T) -> T {
        value
    }
}

/// A raw value, predicate or pattern normalized into a chainable pattern.
#[derive(Clone, Copy, Debug)]
pub struct When<C>(C);

/// Normalize `condition` into a pattern.
///
/// Patterns pass through with unchanged behaviour, predicates test the
/// candidate, and raw values (scalars, strings, `Option`s, types listed in
/// [`values!`](crate::values)) are compared for equality.
pub fn when<C>(condition: C) -> When<C> {
    When(condition)
}

impl<C> When<C> {
    /// The wrapped condition.
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<T, C: Pattern<T>> Pattern<T> for When<C> {
    type Output = C::Output;

    #[inline]
    fn matches(&self, value: &T) -> bool {
        self.0.matches(value)
    }

    #[inline]
    fn unwrap(&self, value: T) -> Self::Output {
        self.0.unwrap(value)
    }
}

/// Marker that starts an arm chain: `PATTERN | 0`, `PATTERN | as_::<i32>()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArmStart;

/// Shared arm-start marker.
pub const PATTERN: ArmStart = ArmStart;

impl<C> BitOr<C> for ArmStart {
    type Output = When<C>;

    fn bitor(self, rhs: C) -> When<C> {
        when(rhs)
    }
}

// Predicates

impl<T, F> Pattern<T> for F
where
    F: Fn(&T) -> bool,
{
    type Output = T;

    #[inline]
    fn matches(&self, value: &T) -> bool {
        self(value)
    }

    #[inline]
    fn unwrap(&self, value: T) -> T {
        value
    }
}

// Raw values

/// Make values of the listed types usable as equality patterns.
///
/// Each type gets `Pattern<Ty>` (matches by `==`, passes the value through)
/// and `Pattern<&Ty>` (compares through the reference), so a raw value can
/// sit in `when(..)`, `ds!(..)` or on the right of `then` against owned and
/// borrowed scrutinees alike. The type must implement `PartialEq` and be
/// named without generic parameters.
///
/// ```
/// use matchkit::prelude::*;
///
/// #[derive(PartialEq)]
/// enum Color {
///     Red,
///     Green,
/// }
///
/// matchkit::values!(Color);
///
/// let name = match_on(Color::Green)
///     .arm(when(Color::Red).to("red"))
///     .arm(when(Color::Green).to("green"))
///     .finish();
/// assert_eq!(name, Ok("green"));
/// ```
#[macro_export]
macro_rules! values {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::Pattern<$ty> for $ty {
            type Output = $ty;

            #[inline]
            fn matches(&self, value: &$ty) -> bool {
                *value == *self
            }

            #[inline]
            fn unwrap(&self, value: $ty) -> $ty {
                value
            }
        }

        impl<'a> $crate::Pattern<&'a $ty> for $ty {
            type Output = &'a $ty;

            #[inline]
            fn matches(&self, value: &&'a $ty) -> bool {
                **value == *self
            }

            #[inline]
            fn unwrap(&self, value: &'a $ty) -> &'a $ty {
                value
            }
        }
    )+};
}

values!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
);

impl<'a, 'b> Pattern<&'b str> for &'a str {
    type Output = &'b str;

    #[inline]
    fn matches(&self, value: &&'b str) -> bool {
        *value == *self
    }

    #[inline]
    fn unwrap(&self, value: &'b str) -> &'b str {
        value
    }
}

impl Pattern<String> for &str {
    type Output = String;

    #[inline]
    fn matches(&self, value: &String) -> bool {
        *value == *self
    }

    #[inline]
    fn unwrap(&self, value: String) -> String {
        value
    }
}

impl<'b> Pattern<&'b String> for &str {
    type Output = &'b String;

    #[inline]
    fn matches(&self, value: &&'b String) -> bool {
        **value == *self
    }

    #[inline]
    fn unwrap(&self, value: &'b String) -> &'b String {
        value
    }
}

impl<'b> Pattern<&'b str> for String {
    type Output = &'b str;

    #[inline]
    fn matches(&self, value: &&'b str) -> bool {
        *value == self
    }

    #[inline]
    fn unwrap(&self, value: &'b str) -> &'b str {
        value
    }
}

/// `Some(v)` matches a present value equal to `v`; `None` matches absence.
impl<V, T: PartialEq<V>> Pattern<Option<T>> for Option<V> {
    type Output = Option<T>;

    #[inline]
    fn matches(&self, value: &Option<T>) -> bool {
        match (value, self) {
            (Some(value), Some(expected)) => *value == *expected,
            (None, None) => true,
            _ => false,
        }
    }

    #[inline]
    fn unwrap(&self, value: Option<T>) -> Option<T> {
        value
    }
}

impl<'a, V, T: PartialEq<V>> Pattern<&'a Option<T>> for Option<V> {
    type Output = &'a Option<T>;

    #[inline]
    fn matches(&self, value: &&'a Option<T>) -> bool {
        Pattern::<Option<T>>::matches(self, *value)
    }

    #[inline]
    fn unwrap(&self, value: &'a Option<T>) -> &'a Option<T> {
        value
    }
}

pattern_ops!(Wildcard, When<C>);
