/// Payload of a two-variant container, detached from the copy of the library that produced it.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Split<P, A> {
  /// `Some` or `Ok` payload.
  Primary(P),
  /// `Err` payload.
  Alternate(A),
}

/// Outcome container from any copy of `rustly`.
///
/// Implementors expose [`OUTCOME_KIND_MARKER`](crate::OUTCOME_KIND_MARKER) through the blanket
/// [`KindMarked`](crate::KindMarked) implementation, so a type is either an outcome with the right marker or not an
/// outcome at all. Declare implementors with [`nested_outcome!`](crate::nested_outcome) to make `flatten` unwrap them.
pub trait OutcomeLike: Sized {
  type Ok;
  type Err;

  fn into_split(self) -> Split<Self::Ok, Self::Err>;

  /// Moves the success payload out, or gives `self` back untouched when it holds a failure.
  fn try_into_ok(self) -> Result<Self::Ok, Self>;
  /// Moves the failure payload out, or gives `self` back untouched when it holds a success.
  fn try_into_err(self) -> Result<Self::Err, Self>;
}

/// Payload found on the success side of an outcome being flattened.
pub trait FlattenOk<O, E> {
  fn flatten_ok(self) -> Split<O, E>;
}

/// Payload found on the failure side of an outcome being flattened.
pub trait FlattenErr<O, E> {
  fn flatten_err(self) -> Split<O, E>;
}

/// Recursively unwraps nested outcomes until a terminal payload is reached, on whichever side it sits.
pub fn flatten_nested<T, O, E>(outcome: T) -> Split<O, E> where
  T: OutcomeLike,
  T::Ok: FlattenOk<O, E>,
  T::Err: FlattenErr<O, E>,
{
  match outcome.into_split() {
    Split::Primary(ok) => ok.flatten_ok(),
    Split::Alternate(err) => err.flatten_err(),
  }
}
