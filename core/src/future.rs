use std::future::Future;

use futures::future::{ready, Ready};
use futures::FutureExt;
use rustly_marker::OutcomeLike;

use crate::outcome::{err, ok, Outcome};

/// What a future resolves to after [`then_on_ok`](OutcomeFutureExt::then_on_ok) or
/// [`then_on_err`](OutcomeFutureExt::then_on_err).
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Resolved<U, T> {
  /// The callback ran and returned this.
  Handled(U),
  /// The callback did not run. Holds the originally resolved value, untouched.
  Passed(T),
}

impl<U, T> Resolved<U, T> {
  #[inline]
  pub fn is_handled(&self) -> bool { matches!(self, Self::Handled(_)) }

  #[inline]
  pub fn handled(self) -> Option<U> {
    match self {
      Self::Handled(value) => Some(value),
      Self::Passed(_) => None,
    }
  }
  #[inline]
  pub fn passed(self) -> Option<T> {
    match self {
      Self::Handled(_) => None,
      Self::Passed(value) => Some(value),
    }
  }
}

/// Outcome-aware chaining for futures resolving to an outcome of any copy of this library.
pub trait OutcomeFutureExt: Future + Sized {
  /// Calls `callback` with the success payload once `self` resolves to an outcome in the `Ok` state. A failure is
  /// passed through unmodified.
  fn then_on_ok<U, C>(self, callback: C) -> impl Future<Output=Resolved<U, Self::Output>> where
    Self::Output: OutcomeLike,
    C: FnOnce(<Self::Output as OutcomeLike>::Ok) -> U;

  /// Calls `callback` with the failure payload once `self` resolves to an outcome in the `Err` state. A success is
  /// passed through unmodified.
  fn then_on_err<U, C>(self, callback: C) -> impl Future<Output=Resolved<U, Self::Output>> where
    Self::Output: OutcomeLike,
    C: FnOnce(<Self::Output as OutcomeLike>::Err) -> U;
}

impl<F: Future> OutcomeFutureExt for F {
  #[inline]
  fn then_on_ok<U, C>(self, callback: C) -> impl Future<Output=Resolved<U, Self::Output>> where
    Self::Output: OutcomeLike,
    C: FnOnce(<Self::Output as OutcomeLike>::Ok) -> U,
  {
    self.map(|output| match output.try_into_ok() {
      Ok(value) => Resolved::Handled(callback(value)),
      Err(output) => Resolved::Passed(output),
    })
  }

  #[inline]
  fn then_on_err<U, C>(self, callback: C) -> impl Future<Output=Resolved<U, Self::Output>> where
    Self::Output: OutcomeLike,
    C: FnOnce(<Self::Output as OutcomeLike>::Err) -> U,
  {
    self.map(|output| match output.try_into_err() {
      Ok(error) => Resolved::Handled(callback(error)),
      Err(output) => Resolved::Passed(output),
    })
  }
}

/// Creates a future that is immediately ready with `Ok(value)`.
#[inline]
pub fn ready_ok<O, E>(value: O) -> Ready<Outcome<O, E>> { ready(ok(value)) }

/// Creates a future that is immediately ready with `Err(error)`.
#[inline]
pub fn ready_err<O, E>(error: E) -> Ready<Outcome<O, E>> { ready(err(error)) }
