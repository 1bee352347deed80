//! Matchkit - composable patterns and first-match dispatch.
//!
//! This crate provides:
//! - The `Pattern` abstraction: a condition over a candidate value plus an
//!   unwrap that narrows it for the next stage
//! - Unconditional and normalized forms (`Wildcard`, `when`, raw values,
//!   predicates)
//! - Combinators (`then` / `|` refinement, relational tests anchored on
//!   `Wildcard`)
//! - Extractors for sum types (`as_::<T>()`), optionals (`SOME`, `NONE`) and
//!   tuples (`ds`)
//! - Arms with explicitly chosen handler kinds, and an ordered dispatcher
//!
//! # Dispatch
//!
//! ```
//! use matchkit::prelude::*;
//!
//! fn check_value(n: i32) -> String {
//!     match_!(n;
//!         Wildcard.lt(0).bind(|x: i32| format!("{x} is negative")),
//!         Wildcard.lt(100).bind(|x: i32| format!("{x} is lower than 100")),
//!         (PATTERN | 100).to("100 is 100".to_string()),
//!         Wildcard.bind(|x: i32| format!("{x} is greater than 100")),
//!     )
//!     .unwrap_or_default()
//! }
//!
//! assert_eq!(check_value(-1), "-1 is negative");
//! assert_eq!(check_value(100), "100 is 100");
//! assert_eq!(check_value(120), "120 is greater than 100");
//! ```
//!
//! Arms are tried in order and the first whose condition holds runs its
//! handler. A chain that nothing accepts finishes with
//! [`MatchExhaustionError`]; end the chain with a `Wildcard` arm for
//! totality.
//!
//! # Capabilities
//!
//! Sum types and optional containers are reached only through the
//! [`Alternative`] and [`Optional`] traits. `dyn Any` handles and `Option`
//! come implemented; user enums opt in with [`alternatives!`]. User types
//! become raw equality values with [`values!`].

/// `PatternOps` plus `|` chaining for a crate pattern type.
macro_rules! pattern_ops {
    ($($ty:ident $(<$($g:ident),+>)?),+ $(,)?) => {$(
        impl$(<$($g),+>)? $crate::PatternOps for $ty$(<$($g),+>)? {}

        impl<$($($g,)+)? Rhs> ::std::ops::BitOr<Rhs> for $ty$(<$($g),+>)? {
            type Output = $crate::Then<Self, Rhs>;

            fn bitor(self, rhs: Rhs) -> Self::Output {
                $crate::Then::new(self, rhs)
            }
        }
    )+};
}

mod arm;
mod combinators;
mod destructure;
mod dispatch;
mod errors;
mod extractors;
mod pattern;

pub use arm::{Arm, Const, Handler, Nullary, PatternOps, Spread, Unary};
pub use combinators::{
    val, Compare, Equals, Operand, Relation, ScrutineeLeft, ScrutineeRight, Then,
};
pub use destructure::{ds, Ds};
pub use dispatch::{match_on, Match};
pub use errors::MatchExhaustionError;
pub use extractors::{as_, Absent, Alternative, As, Optional, Present, NONE, SOME};
pub use pattern::{when, ArmStart, Pattern, When, Wildcard, PATTERN, WILDCARD};

/// Everything needed to write patterns and dispatch on them.
pub mod prelude {
    pub use crate::{
        alternatives, as_, ds, match_, match_on, val, values, when, Alternative,
        MatchExhaustionError, Optional, Pattern, PatternOps, Wildcard, NONE, PATTERN, SOME,
        WILDCARD,
    };
}
