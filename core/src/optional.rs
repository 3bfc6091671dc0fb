use std::fmt::{self, Debug, Formatter};

use rustly_marker::{terminal, KindMarked, OPTIONAL_KIND_MARKER};

use crate::error::InvalidStateError;
use crate::outcome::{self, Outcome};

/// Presence (`Some`) or absence (`None`) of a value.
///
/// A single-slot cell: [`insert`](Self::insert), [`take`](Self::take), and [`replace`](Self::replace) change the
/// receiver in place, every other operation leaves it alone and returns a new container. Destructure with
/// [`match_with`](Self::match_with), or convert [`into_option`](Self::into_option) to use Rust's own `match`.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Optional<V>(Option<V>);

/// Creates `Some(value)`.
#[inline]
pub fn some<V>(value: V) -> Optional<V> { Optional::some(value) }

/// Creates `None`.
#[inline]
pub fn none<V>() -> Optional<V> { Optional::none() }

impl<V> Optional<V> {
  #[inline]
  pub const fn some(value: V) -> Self { Self(Some(value)) }
  #[inline]
  pub const fn none() -> Self { Self(None) }


  #[inline]
  pub const fn is_some(&self) -> bool { self.0.is_some() }
  #[inline]
  pub const fn is_none(&self) -> bool { self.0.is_none() }

  /// Returns `true` if this is `Some` and `predicate` holds for the value. `predicate` is not called on `None`.
  #[inline]
  pub fn is_some_and(&self, predicate: impl FnOnce(&V) -> bool) -> bool {
    match &self.0 {
      Some(value) => predicate(value),
      None => false,
    }
  }
  /// Returns `true` if this is `None` and `predicate` holds. `predicate` is not called on `Some`.
  #[inline]
  pub fn is_none_and(&self, predicate: impl FnOnce() -> bool) -> bool {
    match &self.0 {
      Some(_) => false,
      None => predicate(),
    }
  }


  /// Returns the value.
  ///
  /// # Panics
  ///
  /// Panics with [`InvalidStateError::ExpectedSome`] if this is `None`.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> V {
    match self.0 {
      Some(value) => value,
      None => InvalidStateError::ExpectedSome.raise(),
    }
  }
  #[inline]
  pub fn try_unwrap(self) -> Result<V, InvalidStateError> {
    self.0.ok_or(InvalidStateError::ExpectedSome)
  }

  #[inline]
  pub fn unwrap_or(self, default: V) -> V {
    match self.0 {
      Some(value) => value,
      None => default,
    }
  }
  /// Returns the value, or the result of `default` if this is `None`. `default` is only called on `None`.
  #[inline]
  pub fn unwrap_or_else(self, default: impl FnOnce() -> V) -> V {
    match self.0 {
      Some(value) => value,
      None => default(),
    }
  }

  /// Does nothing if this is `None`.
  ///
  /// # Panics
  ///
  /// Panics with [`InvalidStateError::ExpectedNone`] if this is `Some`.
  #[inline]
  #[track_caller]
  pub fn unwrap_none(&self) {
    if let Err(error) = self.try_unwrap_none() {
      error.raise()
    }
  }
  #[inline]
  pub fn try_unwrap_none(&self) -> Result<(), InvalidStateError> {
    match self.0 {
      Some(_) => Err(InvalidStateError::ExpectedNone),
      None => Ok(()),
    }
  }

  /// Returns the value.
  ///
  /// # Panics
  ///
  /// Panics with `message` if this is `None`.
  #[inline]
  #[track_caller]
  pub fn expect(self, message: &str) -> V {
    match self.0 {
      Some(value) => value,
      None => panic!("{}", message),
    }
  }

  /// Calls exactly one of `some` (with the value) or `none`, returning what it returns.
  #[inline]
  pub fn match_with<R>(self, some: impl FnOnce(V) -> R, none: impl FnOnce() -> R) -> R {
    match self.0 {
      Some(value) => some(value),
      None => none(),
    }
  }


  /// Sets this to `Some(value)`, overwriting any previous value, and returns `self`.
  #[inline]
  pub fn insert(&mut self, value: V) -> &mut Self {
    self.0 = Some(value);
    self
  }
  /// Moves the value out, leaving `None` behind. Returns `None` and leaves `self` alone if it already is `None`.
  #[inline]
  pub fn take(&mut self) -> Self {
    Self(self.0.take())
  }
  /// Sets this to `Some(value)`, returning the previous state.
  #[inline]
  pub fn replace(&mut self, value: V) -> Self {
    let previous = self.take();
    self.0 = Some(value);
    previous
  }


  #[inline]
  pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Optional<U> {
    Optional(self.0.map(f))
  }
  /// Returns `Some(f(value))`, or `Some(default)` if this is `None`. The result is always `Some`.
  #[inline]
  pub fn map_or<U>(self, default: U, f: impl FnOnce(V) -> U) -> Optional<U> {
    Optional::some(self.0.map_or(default, f))
  }
  /// Returns `Some(f(value))`, or `Some(default())` if this is `None`. `default` is only called on `None`.
  #[inline]
  pub fn map_or_else<U>(self, default: impl FnOnce() -> U, f: impl FnOnce(V) -> U) -> Optional<U> {
    Optional::some(self.0.map_or_else(default, f))
  }

  #[inline]
  pub fn ok_or<E>(self, default: E) -> Outcome<V, E> {
    match self.0 {
      Some(value) => outcome::ok(value),
      None => outcome::err(default),
    }
  }
  /// Returns `Ok(value)`, or `Err(default())` if this is `None`. `default` is only called on `None`.
  #[inline]
  pub fn ok_or_else<E>(self, default: impl FnOnce() -> E) -> Outcome<V, E> {
    match self.0 {
      Some(value) => outcome::ok(value),
      None => outcome::err(default()),
    }
  }

  /// Returns `self` if it is `Some`, otherwise `other`.
  #[inline]
  pub fn or(self, other: Self) -> Self {
    if self.is_some() { self } else { other }
  }
  /// Returns `other` if `self` is `Some`, otherwise `None`.
  #[inline]
  pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
    if self.is_some() { other } else { Optional::none() }
  }


  #[inline]
  pub const fn as_ref(&self) -> Optional<&V> { Optional(self.0.as_ref()) }
  #[inline]
  pub fn as_mut(&mut self) -> Optional<&mut V> { Optional(self.0.as_mut()) }

  #[inline]
  pub fn into_option(self) -> Option<V> { self.0 }
}

impl<V> Default for Optional<V> {
  #[inline]
  fn default() -> Self { Self::none() }
}

impl<V> From<Option<V>> for Optional<V> {
  #[inline]
  fn from(option: Option<V>) -> Self { Self(option) }
}
impl<V> From<Optional<V>> for Option<V> {
  #[inline]
  fn from(optional: Optional<V>) -> Self { optional.0 }
}

impl<V: Debug> Debug for Optional<V> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match &self.0 {
      Some(value) => f.debug_tuple("Some").field(value).finish(),
      None => f.write_str("None"),
    }
  }
}

impl<V> KindMarked for Optional<V> {
  #[inline]
  fn kind_marker(&self) -> Option<&str> { Some(OPTIONAL_KIND_MARKER) }
}

// An optional found inside an outcome ends `flatten` recursion.
terminal!(impl<V> Optional<V>);
