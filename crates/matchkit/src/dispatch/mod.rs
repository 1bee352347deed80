//! Ordered first-match dispatch.
//!
//! [`match_on`] starts a [`Match`] holding the scrutinee. Each `.arm(...)`
//! is tried in source order until one fires; from then on the machine
//! carries the result and every later arm is skipped without evaluating
//! its condition. [`Match::finish`] yields the result, or
//! [`MatchExhaustionError`] when nothing fired.
//!
//! ```
//! use matchkit::prelude::*;
//!
//! fn factorial(n: i32) -> i32 {
//!     match_!(n;
//!         when(0).to(1),
//!         Wildcard.bind(|x: i32| x * factorial(x - 1)),
//!     )
//!     .unwrap_or_default()
//! }
//!
//! assert_eq!(factorial(3), 6);
//! ```

use std::any::type_name;

use tracing::{debug, trace};

use crate::{Arm, Handler, MatchExhaustionError, Pattern};

enum State<T, R> {
    Scanning(T),
    Resolved(R),
}

/// A dispatch in progress over a scrutinee of type `T`, producing `R`.
#[must_use = "a match does nothing until `finish` is called"]
pub struct Match<T, R> {
    state: State<T, R>,
    arms_tried: usize,
}

/// Start dispatching on `scrutinee`. Pack several values into a tuple.
pub fn match_on<T, R>(scrutinee: T) -> Match<T, R> {
    Match {
        state: State::Scanning(scrutinee),
        arms_tried: 0,
    }
}

impl<T, R> Match<T, R> {
    /// Try `arm` if nothing has fired yet.
    ///
    /// The scrutinee is unwrapped by move into the handler, so it is only
    /// unwrapped after the arm's condition accepted it.
    pub fn arm<P, H>(self, arm: Arm<P, H>) -> Self
    where
        P: Pattern<T>,
        H: Handler<P::Output, Outcome = R>,
    {
        let Match { state, arms_tried } = self;
        let scrutinee = match state {
            State::Scanning(scrutinee) => scrutinee,
            resolved @ State::Resolved(_) => {
                return Match {
                    state: resolved,
                    arms_tried,
                };
            }
        };

        let index = arms_tried;
        let arms_tried = arms_tried.saturating_add(1);
        let state = match arm.try_fire(scrutinee) {
            Ok(outcome) => {
                trace!(arm = index, scrutinee = type_name::<T>(), "arm fired");
                State::Resolved(outcome)
            }
            Err(scrutinee) => State::Scanning(scrutinee),
        };
        Match { state, arms_tried }
    }

    /// Whether some arm has already fired.
    pub fn is_resolved(&self) -> bool {
        matches!(self.state, State::Resolved(_))
    }

    /// How many arms had their condition evaluated so far.
    pub fn arms_tried(&self) -> usize {
        self.arms_tried
    }

    /// The fired arm's result, or an error if no arm accepted the scrutinee.
    pub fn finish(self) -> Result<R, MatchExhaustionError> {
        match self.state {
            State::Resolved(outcome) => Ok(outcome),
            State::Scanning(_) => {
                debug!(
                    scrutinee = type_name::<T>(),
                    arms_tried = self.arms_tried,
                    "no arm matched"
                );
                Err(MatchExhaustionError::new(
                    type_name::<T>(),
                    self.arms_tried,
                ))
            }
        }
    }
}

/// Dispatch over one or more scrutinees with a list of arms.
///
/// `match_!(x; a1, a2)` is `match_on(x).arm(a1).arm(a2).finish()`;
/// `match_!(x, y; a1)` matches the tuple `(x, y)`.
#[macro_export]
macro_rules! match_ {
    ($scrutinee:expr; $($arm:expr),+ $(,)?) => {
        $crate::match_on($scrutinee)$(.arm($arm))+.finish()
    };
    ($($scrutinee:expr),+; $($arm:expr),+ $(,)?) => {
        $crate::match_on(($($scrutinee,)+))$(.arm($arm))+.finish()
    };
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap_err to inspect the exhaustion error"
)]
mod tests;
