//! Arms: a pattern bound to what runs when it matches.
//!
//! The handler kind is picked explicitly when the arm is built, never
//! guessed from the callable's shape:
//!
//! | Binder | Handler | Receives |
//! |--------|---------|----------|
//! | `.to(v)` | [`Const`] | nothing; the arm yields `v` |
//! | `.run(f)` | [`Nullary`] | nothing |
//! | `.bind(f)` | [`Unary`] | the unwrapped value |
//! | `.spread(f)` | [`Spread`] | the unwrapped tuple, one argument per element |

use crate::{Pattern, Then};

/// Something that turns a pattern's unwrapped value into the arm's result.
///
/// Handlers are consumed: an arm fires at most once.
pub trait Handler<I> {
    type Outcome;

    fn call(self, input: I) -> Self::Outcome;
}

/// Ignores its input and yields a stored value.
#[derive(Clone, Copy, Debug)]
pub struct Const<R>(R);

/// Ignores its input and calls `F()`.
#[derive(Clone, Copy, Debug)]
pub struct Nullary<F>(F);

/// Calls `F(input)`.
#[derive(Clone, Copy, Debug)]
pub struct Unary<F>(F);

/// Calls `F(a, b, ...)` with the elements of a tuple input.
#[derive(Clone, Copy, Debug)]
pub struct Spread<F>(F);

impl<I, R> Handler<I> for Const<R> {
    type Outcome = R;

    #[inline]
    fn call(self, _input: I) -> R {
        self.0
    }
}

impl<I, F, R> Handler<I> for Nullary<F>
where
    F: FnOnce() -> R,
{
    type Outcome = R;

    #[inline]
    fn call(self, _input: I) -> R {
        (self.0)()
    }
}

impl<I, F, R> Handler<I> for Unary<F>
where
    F: FnOnce(I) -> R,
{
    type Outcome = R;

    #[inline]
    fn call(self, input: I) -> R {
        (self.0)(input)
    }
}

macro_rules! spread_handler {
    ($(($arg:ident, $binding:ident)),+) => {
        impl<Func, R, $($arg,)+> Handler<($($arg,)+)> for Spread<Func>
        where
            Func: FnOnce($($arg),+) -> R,
        {
            type Outcome = R;

            #[inline]
            fn call(self, ($($binding,)+): ($($arg,)+)) -> R {
                (self.0)($($binding),+)
            }
        }
    };
}

spread_handler!((T0, x0));
spread_handler!((T0, x0), (T1, x1));
spread_handler!((T0, x0), (T1, x1), (T2, x2));
spread_handler!((T0, x0), (T1, x1), (T2, x2), (T3, x3));
spread_handler!((T0, x0), (T1, x1), (T2, x2), (T3, x3), (T4, x4));
spread_handler!((T0, x0), (T1, x1), (T2, x2), (T3, x3), (T4, x4), (T5, x5));
spread_handler!(
    (T0, x0),
    (T1, x1),
    (T2, x2),
    (T3, x3),
    (T4, x4),
    (T5, x5),
    (T6, x6)
);
spread_handler!(
    (T0, x0),
    (T1, x1),
    (T2, x2),
    (T3, x3),
    (T4, x4),
    (T5, x5),
    (T6, x6),
    (T7, x7)
);
spread_handler!(
    (T0, x0),
    (T1, x1),
    (T2, x2),
    (T3, x3),
    (T4, x4),
    (T5, x5),
    (T6, x6),
    (T7, x7),
    (T8, x8)
);
spread_handler!(
    (T0, x0),
    (T1, x1),
    (T2, x2),
    (T3, x3),
    (T4, x4),
    (T5, x5),
    (T6, x6),
    (T7, x7),
    (T8, x8),
    (T9, x9)
);
spread_handler!(
    (T0, x0),
    (T1, x1),
    (T2, x2),
    (T3, x3),
    (T4, x4),
    (T5, x5),
    (T6, x6),
    (T7, x7),
    (T8, x8),
    (T9, x9),
    (T10, x10)
);
spread_handler!(
    (T0, x0),
    (T1, x1),
    (T2, x2),
    (T3, x3),
    (T4, x4),
    (T5, x5),
    (T6, x6),
    (T7, x7),
    (T8, x8),
    (T9, x9),
    (T10, x10),
    (T11, x11)
);

/// A pattern paired with its handler.
#[derive(Clone, Copy, Debug)]
pub struct Arm<P, H> {
    pattern: P,
    handler: H,
}

impl<P, H> Arm<P, H> {
    /// Pair `pattern` with `handler`. The `PatternOps` binders call this.
    pub fn new(pattern: P, handler: H) -> Self {
        Arm { pattern, handler }
    }

    /// The arm's condition.
    pub fn pattern(&self) -> &P {
        &self.pattern
    }

    /// Test `value` against the arm's condition without running anything.
    pub fn matches<T>(&self, value: &T) -> bool
    where
        P: Pattern<T>,
    {
        self.pattern.matches(value)
    }

    /// Test, then unwrap and run the handler; hands `value` back on a miss.
    pub fn try_fire<T>(self, value: T) -> Result<H::Outcome, T>
    where
        P: Pattern<T>,
        H: Handler<P::Output>,
    {
        if self.pattern.matches(&value) {
            Ok(self.handler.call(self.pattern.unwrap(value)))
        } else {
            Err(value)
        }
    }
}

/// Chaining and arm-building methods shared by every pattern type.
///
/// Raw values and closures are patterns but foreign types, so they pick
/// these methods up through [`when`](crate::when) or [`PATTERN`](crate::PATTERN).
pub trait PatternOps: Sized {
    /// Refine: test `next` against what `self` unwrapped. Same as `self | next`.
    fn then<B>(self, next: B) -> Then<Self, B> {
        Then::new(self, next)
    }

    /// Arm yielding `value`.
    fn to<R>(self, value: R) -> Arm<Self, Const<R>> {
        Arm::new(self, Const(value))
    }

    /// Arm calling `handler()`.
    fn run<F>(self, handler: F) -> Arm<Self, Nullary<F>> {
        Arm::new(self, Nullary(handler))
    }

    /// Arm calling `handler(unwrapped)`.
    fn bind<F>(self, handler: F) -> Arm<Self, Unary<F>> {
        Arm::new(self, Unary(handler))
    }

    /// Arm calling `handler(a, b, ...)` on an unwrapped tuple.
    fn spread<F>(self, handler: F) -> Arm<Self, Spread<F>> {
        Arm::new(self, Spread(handler))
    }
}
