//! `Optional`: zero or one value, returned by every query that may come up empty.
//!
//! The payload can only be reached through a presence check, so there is no
//! way to observe an uninitialized value. Conversions to and from
//! [`Option`] keep it interoperable with the rest of the ecosystem.

use crate::error::DequeError;

/// A value of type `T`, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[must_use = "an `Optional` may be absent and should be checked"]
pub enum Optional<T> {
    /// No value.
    #[default]
    Absent,
    /// A value owned by this wrapper.
    Present(T),
}

impl<T> Optional<T> {
    /// Wraps `value` as present.
    #[inline(always)]
    pub const fn some(value: T) -> Self {
        Optional::Present(value)
    }

    /// The absent wrapper.
    #[inline(always)]
    pub const fn none() -> Self {
        Optional::Absent
    }

    /// Returns `true` if a value is held.
    #[inline(always)]
    pub const fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// Returns `true` if no value is held.
    #[inline(always)]
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Borrows the payload.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Mutably borrows the payload.
    #[inline]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Takes the payload out.
    ///
    /// # Errors
    /// Returns [`DequeError::EmptyValue`] when absent.
    #[inline]
    pub fn value(self) -> Result<T, DequeError> {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Absent => Err(DequeError::EmptyValue),
        }
    }

    /// Returns the payload or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => default,
        }
    }

    /// Returns the payload or computes one.
    #[inline]
    pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => f(),
        }
    }

    /// Maps the payload, keeping absence.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        match self {
            Optional::Present(value) => Optional::Present(f(value)),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Moves the payload out, leaving `Absent` behind.
    #[inline]
    pub fn take(&mut self) -> Optional<T> {
        core::mem::take(self)
    }

    /// Converts into a standard [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Present(value),
            None => Optional::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}
