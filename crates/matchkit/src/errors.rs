//! Error types for match dispatch.
//!
//! Dispatch has exactly one recoverable failure: running out of arms.
//! Everything else that can go wrong is either a user panic (propagated
//! untouched) or a broken condition-before-unwrap contract, which is a bug
//! and panics through [`contract_violation`].

use thiserror::Error;

/// No arm of a `match_on` chain accepted the scrutinee.
///
/// There is no implicit fallback arm: callers that need totality end the
/// chain with a `Wildcard` arm.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("no arm matched scrutinee of type `{scrutinee}` ({arms_tried} arms tried)")]
pub struct MatchExhaustionError {
    scrutinee: &'static str,
    arms_tried: usize,
}

impl MatchExhaustionError {
    #[cold]
    pub(crate) fn new(scrutinee: &'static str, arms_tried: usize) -> Self {
        MatchExhaustionError {
            scrutinee,
            arms_tried,
        }
    }

    /// Type name of the value nobody matched.
    pub fn scrutinee(&self) -> &'static str {
        self.scrutinee
    }

    /// How many arms had their condition evaluated.
    pub fn arms_tried(&self) -> usize {
        self.arms_tried
    }
}

/// An extractor was asked to unwrap a value its own condition rejects.
///
/// Unreachable through `Match`, which always tests before unwrapping.
#[cold]
#[track_caller]
pub(crate) fn contract_violation(extractor: &'static str, value: &'static str) -> ! {
    panic!("`{extractor}` cannot unwrap this `{value}`: its condition does not hold")
}
