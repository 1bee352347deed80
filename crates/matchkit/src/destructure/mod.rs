//! Positional destructuring of tuples.
//!
//! `ds((p1, ..., pn))` matches an n-tuple when every element satisfies the
//! sub-pattern at the same position. Each sub-pattern can be any pattern,
//! `Wildcard`, a predicate, or a raw value. Elements are tested left to
//! right and testing stops at the first failure, so a side-effecting
//! sub-pattern may never run. A successful match unwraps to the tuple of
//! per-element unwraps, which `.spread(...)` hands to a handler as
//! positional arguments.

use crate::Pattern;

/// Per-position sub-patterns over a tuple. Built by [`ds`] or [`ds!`](crate::ds!).
#[derive(Clone, Copy, Debug)]
pub struct Ds<P>(P);

/// Destructure a tuple scrutinee with one sub-pattern per element.
pub fn ds<P>(patterns: P) -> Ds<P> {
    Ds(patterns)
}

/// `ds!(a, b, c)` is `ds((a, b, c))`.
#[macro_export]
macro_rules! ds {
    ($($pattern:expr),+ $(,)?) => {
        $crate::ds(($($pattern,)+))
    };
}

macro_rules! tuple_destructure {
    ($(($idx:tt, $value:ident, $pattern:ident)),+) => {
        impl<$($value,)+ $($pattern,)+> Pattern<($($value,)+)> for Ds<($($pattern,)+)>
        where
            $($pattern: Pattern<$value>,)+
        {
            type Output = ($(<$pattern as Pattern<$value>>::Output,)+);

            #[inline]
            fn matches(&self, value: &($($value,)+)) -> bool {
                true $(&& (self.0).$idx.matches(&value.$idx))+
            }

            #[inline]
            fn unwrap(&self, value: ($($value,)+)) -> Self::Output {
                ($((self.0).$idx.unwrap(value.$idx),)+)
            }
        }
    };
}

tuple_destructure!((0, A, PA));
tuple_destructure!((0, A, PA), (1, B, PB));
tuple_destructure!((0, A, PA), (1, B, PB), (2, C, PC));
tuple_destructure!((0, A, PA), (1, B, PB), (2, C, PC), (3, D, PD));
tuple_destructure!((0, A, PA), (1, B, PB), (2, C, PC), (3, D, PD), (4, E, PE));
tuple_destructure!((0, A, PA), (1, B, PB), (2, C, PC), (3, D, PD), (4, E, PE), (5, F, PF));
tuple_destructure!(
    (0, A, PA),
    (1, B, PB),
    (2, C, PC),
    (3, D, PD),
    (4, E, PE),
    (5, F, PF),
    (6, G, PG)
);
tuple_destructure!(
    (0, A, PA),
    (1, B, PB),
    (2, C, PC),
    (3, D, PD),
    (4, E, PE),
    (5, F, PF),
    (6, G, PG),
    (7, H, PH)
);
tuple_destructure!(
    (0, A, PA),
    (1, B, PB),
    (2, C, PC),
    (3, D, PD),
    (4, E, PE),
    (5, F, PF),
    (6, G, PG),
    (7, H, PH),
    (8, I, PI)
);
tuple_destructure!(
    (0, A, PA),
    (1, B, PB),
    (2, C, PC),
    (3, D, PD),
    (4, E, PE),
    (5, F, PF),
    (6, G, PG),
    (7, H, PH),
    (8, I, PI),
    (9, J, PJ)
);
tuple_destructure!(
    (0, A, PA),
    (1, B, PB),
    (2, C, PC),
    (3, D, PD),
    (4, E, PE),
    (5, F, PF),
    (6, G, PG),
    (7, H, PH),
    (8, I, PI),
    (9, J, PJ),
    (10, K, PK)
);
tuple_destructure!(
    (0, A, PA),
    (1, B, PB),
    (2, C, PC),
    (3, D, PD),
    (4, E, PE),
    (5, F, PF),
    (6, G, PG),
    (7, H, PH),
    (8, I, PI),
    (9, J, PJ),
    (10, K, PK),
    (11, L, PL)
);

pattern_ops!(Ds<P>);
