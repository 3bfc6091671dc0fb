use std::fmt::{self, Debug, Display, Formatter};

use rustly_marker::{flatten_nested, nested_outcome, FlattenErr, FlattenOk, OutcomeLike, Split};

use crate::error::InvalidStateError;
use crate::optional::Optional;

/// Success (`Ok`) or failure (`Err`) of an operation.
///
/// Immutable: every operation returns a new container. Destructure with [`match_with`](Self::match_with), or convert
/// [`into_result`](Self::into_result) to use `?` and Rust's own `match`.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Outcome<O, E>(Result<O, E>);

/// Creates `Ok(value)`.
#[inline]
pub fn ok<O, E>(value: O) -> Outcome<O, E> { Outcome(Ok(value)) }

/// Creates `Err(error)`.
#[inline]
pub fn err<O, E>(error: E) -> Outcome<O, E> { Outcome(Err(error)) }

impl<O, E> Outcome<O, E> {
  #[inline]
  pub const fn is_ok(&self) -> bool { self.0.is_ok() }
  #[inline]
  pub const fn is_err(&self) -> bool { self.0.is_err() }

  /// Returns `true` if this is `Ok` and `predicate` holds for the value. `predicate` is not called on `Err`.
  #[inline]
  pub fn is_ok_and(&self, predicate: impl FnOnce(&O) -> bool) -> bool {
    match &self.0 {
      Ok(value) => predicate(value),
      Err(_) => false,
    }
  }
  /// Returns `true` if this is `Err` and `predicate` holds for the error. `predicate` is not called on `Ok`.
  #[inline]
  pub fn is_err_and(&self, predicate: impl FnOnce(&E) -> bool) -> bool {
    match &self.0 {
      Ok(_) => false,
      Err(error) => predicate(error),
    }
  }


  /// Converts into `Some(value)` if this is `Ok`, or `None` otherwise.
  #[inline]
  pub fn ok(self) -> Optional<O> { self.0.ok().into() }
  /// Converts into `Some(error)` if this is `Err`, or `None` otherwise.
  #[inline]
  pub fn err(self) -> Optional<E> { self.0.err().into() }


  /// Returns the success value.
  ///
  /// # Panics
  ///
  /// Panics with [`InvalidStateError::ExpectedOk`] if this is `Err`.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> O {
    match self.0 {
      Ok(value) => value,
      Err(_) => InvalidStateError::ExpectedOk.raise(),
    }
  }
  #[inline]
  pub fn try_unwrap(self) -> Result<O, InvalidStateError> {
    self.0.map_err(|_| InvalidStateError::ExpectedOk)
  }

  /// Returns the failure value.
  ///
  /// # Panics
  ///
  /// Panics with [`InvalidStateError::ExpectedErr`] if this is `Ok`.
  #[inline]
  #[track_caller]
  pub fn unwrap_err(self) -> E {
    match self.0 {
      Ok(_) => InvalidStateError::ExpectedErr.raise(),
      Err(error) => error,
    }
  }
  #[inline]
  pub fn try_unwrap_err(self) -> Result<E, InvalidStateError> {
    match self.0 {
      Ok(_) => Err(InvalidStateError::ExpectedErr),
      Err(error) => Ok(error),
    }
  }

  #[inline]
  pub fn unwrap_or(self, default: O) -> O { self.0.unwrap_or(default) }
  /// Returns the success value, or the result of `default` if this is `Err`. `default` is only called on `Err`.
  #[inline]
  pub fn unwrap_or_else(self, default: impl FnOnce() -> O) -> O {
    match self.0 {
      Ok(value) => value,
      Err(_) => default(),
    }
  }

  #[inline]
  pub fn unwrap_err_or(self, default: E) -> E {
    match self.0 {
      Ok(_) => default,
      Err(error) => error,
    }
  }
  /// Returns the failure value, or the result of `default` if this is `Ok`. `default` is only called on `Ok`.
  #[inline]
  pub fn unwrap_err_or_else(self, default: impl FnOnce() -> E) -> E {
    match self.0 {
      Ok(_) => default(),
      Err(error) => error,
    }
  }

  /// Returns the success value.
  ///
  /// # Panics
  ///
  /// Panics with `"{message}: {error}"` if this is `Err`.
  #[inline]
  #[track_caller]
  pub fn expect(self, message: &str) -> O where E: Display {
    match self.0 {
      Ok(value) => value,
      Err(error) => panic!("{}: {}", message, error),
    }
  }
  /// Returns the failure value.
  ///
  /// # Panics
  ///
  /// Panics with `"{message}: {value}"` if this is `Ok`.
  #[inline]
  #[track_caller]
  pub fn expect_err(self, message: &str) -> E where O: Display {
    match self.0 {
      Ok(value) => panic!("{}: {}", message, value),
      Err(error) => error,
    }
  }

  /// Calls exactly one of `ok` (with the success value) or `err` (with the failure value), returning what it returns.
  #[inline]
  pub fn match_with<R>(self, ok: impl FnOnce(O) -> R, err: impl FnOnce(E) -> R) -> R {
    match self.0 {
      Ok(value) => ok(value),
      Err(error) => err(error),
    }
  }


  #[inline]
  pub fn map<U>(self, f: impl FnOnce(O) -> U) -> Outcome<U, E> { Outcome(self.0.map(f)) }
  #[inline]
  pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<O, F> { Outcome(self.0.map_err(f)) }

  /// Returns `Ok(f(value))`, or `Ok(default)` if this is `Err`. The result is always `Ok`.
  #[inline]
  pub fn map_or<U>(self, default: U, f: impl FnOnce(O) -> U) -> Outcome<U, E> {
    ok(self.0.map_or(default, f))
  }
  /// Returns `Ok(f(value))`, or `Ok(default())` if this is `Err`. `default` is only called on `Err`.
  #[inline]
  pub fn map_or_else<U>(self, default: impl FnOnce() -> U, f: impl FnOnce(O) -> U) -> Outcome<U, E> {
    ok(self.0.map_or_else(|_| default(), f))
  }

  /// Returns `Err(f(error))`, or `Err(default)` if this is `Ok`. The result is always `Err`.
  #[inline]
  pub fn map_err_or<F>(self, default: F, f: impl FnOnce(E) -> F) -> Outcome<O, F> {
    match self.0 {
      Ok(_) => err(default),
      Err(error) => err(f(error)),
    }
  }
  /// Returns `Err(f(error))`, or `Err(default())` if this is `Ok`. `default` is only called on `Ok`.
  #[inline]
  pub fn map_err_or_else<F>(self, default: impl FnOnce() -> F, f: impl FnOnce(E) -> F) -> Outcome<O, F> {
    match self.0 {
      Ok(_) => err(default()),
      Err(error) => err(f(error)),
    }
  }

  /// Returns `self` if it is `Ok`, otherwise `other`.
  #[inline]
  pub fn or<F>(self, other: Outcome<O, F>) -> Outcome<O, F> {
    match self.0 {
      Ok(value) => ok(value),
      Err(_) => other,
    }
  }
  /// Returns `other` if `self` is `Ok`, otherwise the failure of `self`.
  #[inline]
  pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
    match self.0 {
      Ok(_) => other,
      Err(error) => err(error),
    }
  }

  /// Unwraps nested outcomes on either side until a terminal value is reached, which keeps the side it was found on.
  ///
  /// Nested outcomes are recognized through the [`OutcomeLike`] protocol, so outcomes produced by another copy of this
  /// library are flattened as well. Non-nested outcomes are returned as they are.
  #[inline]
  pub fn flatten<P, A>(self) -> Outcome<P, A> where
    O: FlattenOk<P, A>,
    E: FlattenErr<P, A>,
  {
    Outcome::from(flatten_nested::<Self, P, A>(self))
  }


  #[inline]
  pub const fn as_ref(&self) -> Outcome<&O, &E> { Outcome(self.0.as_ref()) }

  #[inline]
  pub fn into_result(self) -> Result<O, E> { self.0 }
}

impl<O, E> Outcome<Vec<O>, E> {
  /// Folds `outcomes` into one, collecting every success value in order.
  ///
  /// The whole sequence is always traversed. Any failure overwrites the accumulated state, so the result is the *last*
  /// failure seen, or `Ok` with all success values when there is none.
  pub fn merge(outcomes: impl IntoIterator<Item=Outcome<O, E>>) -> Self {
    let mut merged = Ok(Vec::new());
    let mut num_failures = 0usize;
    for outcome in outcomes {
      match outcome.0 {
        Ok(value) => if let Ok(values) = &mut merged {
          values.push(value);
        },
        Err(error) => {
          num_failures += 1;
          merged = Err(error);
        }
      }
    }
    tracing::trace!(num_values = merged.as_ref().map_or(0, Vec::len), num_failures, "merged outcomes");
    Self(merged)
  }
}

impl<O, E> Outcome<O, Vec<E>> {
  /// Folds `outcomes` into one, collecting every failure value in order.
  ///
  /// The whole sequence is always traversed. Success values are skipped while there is at least one failure; when the
  /// sequence holds no failure at all the result collapses to the *last* success seen. An empty sequence yields
  /// `Err([])`.
  pub fn merge_err(outcomes: impl IntoIterator<Item=Outcome<O, E>>) -> Self {
    let mut errors = Vec::new();
    let mut last_value = None;
    let mut num_values = 0usize;
    for outcome in outcomes {
      match outcome.0 {
        Ok(value) => {
          num_values += 1;
          last_value = Some(value);
        }
        Err(error) => errors.push(error),
      }
    }
    tracing::trace!(num_values, num_failures = errors.len(), "merged failed outcomes");
    match last_value {
      Some(value) if errors.is_empty() => ok(value),
      _ => err(errors),
    }
  }
}

impl<O, E> From<Result<O, E>> for Outcome<O, E> {
  #[inline]
  fn from(result: Result<O, E>) -> Self { Self(result) }
}
impl<O, E> From<Outcome<O, E>> for Result<O, E> {
  #[inline]
  fn from(outcome: Outcome<O, E>) -> Self { outcome.0 }
}
impl<O, E> From<Split<O, E>> for Outcome<O, E> {
  #[inline]
  fn from(split: Split<O, E>) -> Self {
    match split {
      Split::Primary(value) => ok(value),
      Split::Alternate(error) => err(error),
    }
  }
}

impl<O: Debug, E: Debug> Debug for Outcome<O, E> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match &self.0 {
      Ok(value) => f.debug_tuple("Ok").field(value).finish(),
      Err(error) => f.debug_tuple("Err").field(error).finish(),
    }
  }
}

impl<O, E> OutcomeLike for Outcome<O, E> {
  type Ok = O;
  type Err = E;

  #[inline]
  fn into_split(self) -> Split<O, E> {
    match self.0 {
      Ok(value) => Split::Primary(value),
      Err(error) => Split::Alternate(error),
    }
  }
  #[inline]
  fn try_into_ok(self) -> Result<O, Self> {
    match self.0 {
      Ok(value) => Ok(value),
      Err(error) => Err(err(error)),
    }
  }
  #[inline]
  fn try_into_err(self) -> Result<E, Self> {
    match self.0 {
      Ok(value) => Err(ok(value)),
      Err(error) => Ok(error),
    }
  }
}
nested_outcome!(impl<O, E> Outcome<O, E>);
