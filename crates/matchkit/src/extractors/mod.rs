//! Extractors: patterns that test a container's shape and unwrap its payload.
//!
//! The engine never dictates how sum types or optionals are represented.
//! It only needs the capability traits below:
//!
//! - [`Alternative<T>`]: "does this value hold alternative `T`?" plus
//!   extraction. Implemented for `dyn Any` handles here and for user enums
//!   through [`alternatives!`](crate::alternatives).
//! - [`Optional`]: presence test plus extraction. Implemented for `Option`.

use std::any::{type_name, Any};
use std::marker::PhantomData;

use crate::errors::contract_violation;
use crate::Pattern;

/// A value that may currently hold the alternative tagged by `T`.
pub trait Alternative<T>: Sized {
    /// What extraction yields: `T` from an owned value, `&T` from a borrow.
    type Payload;

    /// Whether the value currently holds alternative `T`.
    fn holds(&self) -> bool;

    /// Extract the payload, or hand the value back if it holds something else.
    fn extract(self) -> Result<Self::Payload, Self>;
}

impl<T: Any> Alternative<T> for Box<dyn Any> {
    type Payload = T;

    fn holds(&self) -> bool {
        (**self).is::<T>()
    }

    fn extract(self) -> Result<T, Self> {
        self.downcast::<T>().map(|payload| *payload)
    }
}

impl<T: Any> Alternative<T> for Box<dyn Any + Send> {
    type Payload = T;

    fn holds(&self) -> bool {
        (**self).is::<T>()
    }

    fn extract(self) -> Result<T, Self> {
        self.downcast::<T>().map(|payload| *payload)
    }
}

impl<'a, T: Any> Alternative<T> for &'a dyn Any {
    type Payload = &'a T;

    fn holds(&self) -> bool {
        (**self).is::<T>()
    }

    fn extract(self) -> Result<&'a T, Self> {
        self.downcast_ref::<T>().ok_or(self)
    }
}

impl<'a, T: Any> Alternative<T> for &'a (dyn Any + Send + Sync) {
    type Payload = &'a T;

    fn holds(&self) -> bool {
        (**self).is::<T>()
    }

    fn extract(self) -> Result<&'a T, Self> {
        self.downcast_ref::<T>().ok_or(self)
    }
}

/// Tests for alternative `T` and unwraps its payload. Built by [`as_`].
pub struct As<T>(PhantomData<fn() -> T>);

/// Match values currently holding alternative `T`.
pub const fn as_<T>() -> As<T> {
    As(PhantomData)
}

impl<T> Clone for As<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for As<T> {}

impl<T> std::fmt::Debug for As<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "as_::<{}>", type_name::<T>())
    }
}

impl<T, S: Alternative<T>> Pattern<S> for As<T> {
    type Output = S::Payload;

    #[inline]
    fn matches(&self, value: &S) -> bool {
        value.holds()
    }

    fn unwrap(&self, value: S) -> Self::Output {
        value
            .extract()
            .unwrap_or_else(|_| contract_violation("as_", type_name::<S>()))
    }
}

/// A container whose value may be present or absent.
pub trait Optional: Sized {
    type Item;

    fn is_present(&self) -> bool;

    fn into_present(self) -> Option<Self::Item>;
}

impl<T> Optional for Option<T> {
    type Item = T;

    #[inline]
    fn is_present(&self) -> bool {
        self.is_some()
    }

    #[inline]
    fn into_present(self) -> Option<T> {
        self
    }
}

impl<'a, T> Optional for &'a Option<T> {
    type Item = &'a T;

    #[inline]
    fn is_present(&self) -> bool {
        self.is_some()
    }

    #[inline]
    fn into_present(self) -> Option<&'a T> {
        self.as_ref()
    }
}

/// Matches a present value and unwraps it.
#[derive(Clone, Copy, Debug, Default)]
pub struct Present;

/// Matches an absent value; unwraps to `()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Absent;

pub const SOME: Present = Present;
pub const NONE: Absent = Absent;

impl<O: Optional> Pattern<O> for Present {
    type Output = O::Item;

    #[inline]
    fn matches(&self, value: &O) -> bool {
        value.is_present()
    }

    fn unwrap(&self, value: O) -> O::Item {
        value
            .into_present()
            .unwrap_or_else(|| contract_violation("SOME", type_name::<O>()))
    }
}

impl<O: Optional> Pattern<O> for Absent {
    type Output = ();

    #[inline]
    fn matches(&self, value: &O) -> bool {
        !value.is_present()
    }

    fn unwrap(&self, value: O) {
        if value.is_present() {
            contract_violation("NONE", type_name::<O>());
        }
    }
}

/// Implement [`Alternative`] for each payload type of an enum.
///
/// Every listed variant must be a one-field tuple variant, and payload
/// types must be distinct; the type is the tag. Both the owned enum
/// (payload by move) and `&Enum` (payload by reference) get impls.
///
/// ```
/// use matchkit::prelude::*;
///
/// enum Scalar {
///     Int(i64),
///     Text(String),
/// }
///
/// matchkit::alternatives!(Scalar { Int(i64), Text(String) });
///
/// let value = Scalar::Text("hi".to_string());
/// let described = match_on(&value)
///     .arm(as_::<i64>().to("int"))
///     .arm(as_::<String>().to("text"))
///     .finish();
/// assert_eq!(described, Ok("text"));
/// ```
#[macro_export]
macro_rules! alternatives {
    ($enum:ident { $($variant:ident($payload:ty)),+ $(,)? }) => {$(
        impl $crate::Alternative<$payload> for $enum {
            type Payload = $payload;

            fn holds(&self) -> bool {
                ::core::matches!(self, $enum::$variant(..))
            }

            #[allow(unreachable_patterns)]
            fn extract(self) -> ::core::result::Result<$payload, Self> {
                match self {
                    $enum::$variant(payload) => ::core::result::Result::Ok(payload),
                    other => ::core::result::Result::Err(other),
                }
            }
        }

        impl<'a> $crate::Alternative<$payload> for &'a $enum {
            type Payload = &'a $payload;

            fn holds(&self) -> bool {
                ::core::matches!(self, $enum::$variant(..))
            }

            #[allow(unreachable_patterns)]
            fn extract(self) -> ::core::result::Result<&'a $payload, Self> {
                match self {
                    $enum::$variant(payload) => ::core::result::Result::Ok(payload),
                    other => ::core::result::Result::Err(other),
                }
            }
        }
    )+};
}

pattern_ops!(As<T>, Present, Absent);

#[cfg(test)]
mod tests;
