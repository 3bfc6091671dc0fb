//! Structural identity protocol for `rustly` containers.
//!
//! Two copies of `rustly` compiled into one process (two major versions in one dependency graph, or a plugin built
//! separately) have distinct `Optional` and `Outcome` types, so `TypeId`-based checks disagree about them. Every copy
//! depends on this crate instead, and recognizes containers by the kind marker they expose.

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

mod nested;

pub use nested::{flatten_nested, FlattenErr, FlattenOk, OutcomeLike, Split};

/// Kind marker exposed by every `Optional` container.
pub const OPTIONAL_KIND_MARKER: &str = "e7836d2371f9ab4ce65dafddf7436dd4";
/// Kind marker exposed by every `Outcome` container.
pub const OUTCOME_KIND_MARKER: &str = "7c1ea0d8525bdc7d0676940bccd43860";

/// Value that may expose a container kind marker.
///
/// Every [`OutcomeLike`] exposes [`OUTCOME_KIND_MARKER`] through a blanket implementation that cannot be overridden.
/// Optional containers return [`OPTIONAL_KIND_MARKER`]. Everything else keeps the default, which exposes no marker.
pub trait KindMarked {
  #[inline]
  fn kind_marker(&self) -> Option<&str> { None }
}

impl<T: OutcomeLike> KindMarked for T {
  #[inline]
  fn kind_marker(&self) -> Option<&str> { Some(OUTCOME_KIND_MARKER) }
}

/// Returns `true` if `value` is present and exposes [`OPTIONAL_KIND_MARKER`].
#[inline]
pub fn is_optional_instance<T: KindMarked + ?Sized>(value: Option<&T>) -> bool {
  has_kind_marker(value, OPTIONAL_KIND_MARKER)
}

/// Returns `true` if `value` is present and exposes [`OUTCOME_KIND_MARKER`].
#[inline]
pub fn is_outcome_instance<T: KindMarked + ?Sized>(value: Option<&T>) -> bool {
  has_kind_marker(value, OUTCOME_KIND_MARKER)
}

fn has_kind_marker<T: KindMarked + ?Sized>(value: Option<&T>, expected: &str) -> bool {
  let Some(marker) = value.and_then(|v| v.kind_marker()) else {
    return false;
  };
  if marker == expected {
    return true;
  }
  tracing::trace!(marker, expected, "rejecting value with a different kind marker");
  false
}

/// Declares an [`OutcomeLike`] type as nested-outcome aware: [`flatten`](FlattenOk) unwraps it on whichever side it is
/// found, and keeps recursing into its payloads.
///
/// ```ignore
/// rustly_marker::nested_outcome!(impl<O, E> MyOutcome<O, E>);
/// ```
#[macro_export]
macro_rules! nested_outcome {
  (impl<$($g:ident),* $(,)?> $ty:ty) => {
    impl<__P, __A, $($g),*> $crate::FlattenOk<__P, __A> for $ty where
      $ty: $crate::OutcomeLike,
      <$ty as $crate::OutcomeLike>::Ok: $crate::FlattenOk<__P, __A>,
      <$ty as $crate::OutcomeLike>::Err: $crate::FlattenErr<__P, __A>,
    {
      #[inline]
      fn flatten_ok(self) -> $crate::Split<__P, __A> { $crate::flatten_nested(self) }
    }
    impl<__P, __A, $($g),*> $crate::FlattenErr<__P, __A> for $ty where
      $ty: $crate::OutcomeLike,
      <$ty as $crate::OutcomeLike>::Ok: $crate::FlattenOk<__P, __A>,
      <$ty as $crate::OutcomeLike>::Err: $crate::FlattenErr<__P, __A>,
    {
      #[inline]
      fn flatten_err(self) -> $crate::Split<__P, __A> { $crate::flatten_nested(self) }
    }
  };
  ($ty:ty) => { $crate::nested_outcome!(impl<> $ty); };
}

/// Declares types as terminal: they end [`flatten`](FlattenOk) recursion on whichever side they are found and are kept
/// as they are.
///
/// Generic types list their parameters up front:
///
/// ```ignore
/// rustly_marker::terminal!(Config, impl<T> Wrapper<T>, impl<K, V> Pairs<K, V>);
/// ```
#[macro_export]
macro_rules! terminal {
  () => {};
  (impl<$($g:ident),* $(,)?> $ty:ty $(, $($rest:tt)*)?) => {
    impl<__E, $($g),*> $crate::FlattenOk<$ty, __E> for $ty {
      #[inline]
      fn flatten_ok(self) -> $crate::Split<$ty, __E> { $crate::Split::Primary(self) }
    }
    impl<__O, $($g),*> $crate::FlattenErr<__O, $ty> for $ty {
      #[inline]
      fn flatten_err(self) -> $crate::Split<__O, $ty> { $crate::Split::Alternate(self) }
    }
    $($crate::terminal!($($rest)*);)?
  };
  ($ty:ty $(, $($rest:tt)*)?) => {
    $crate::terminal!(impl<> $ty $(, $($rest)*)?);
  };
}

macro_rules! unmarked {
  ($($ty:ty),* $(,)?) => {$(
    impl KindMarked for $ty {}
  )*};
}

unmarked!((), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, str, String);
impl<T> KindMarked for Vec<T> {}
// std's own containers carry no marker; only `rustly` containers do.
impl<T> KindMarked for Option<T> {}

terminal!(
  (), bool, char,
  u8, u16, u32, u64, u128, usize,
  i8, i16, i32, i64, i128, isize,
  f32, f64,
  String,
  impl<T> Vec<T>,
  impl<T> VecDeque<T>,
  impl<T> LinkedList<T>,
  impl<T> BinaryHeap<T>,
  impl<T, S> HashSet<T, S>,
  impl<K, V, S> HashMap<K, V, S>,
  impl<T> BTreeSet<T>,
  impl<K, V> BTreeMap<K, V>,
  impl<T> Option<T>,
  impl<T, F> Result<T, F>,
);

macro_rules! tuple_terminal {
  ($(($($g:ident),+)),* $(,)?) => {
    terminal!($(impl<$($g),+> ($($g,)+)),*);
  };
}

tuple_terminal!(
  (A),
  (A, B),
  (A, B, C),
  (A, B, C, D),
  (A, B, C, D, F),
  (A, B, C, D, F, G),
  (A, B, C, D, F, G, H),
  (A, B, C, D, F, G, H, I),
  (A, B, C, D, F, G, H, I, J),
  (A, B, C, D, F, G, H, I, J, K),
  (A, B, C, D, F, G, H, I, J, K, L),
  (A, B, C, D, F, G, H, I, J, K, L, M),
);

impl<T, E, const N: usize> FlattenOk<[T; N], E> for [T; N] {
  #[inline]
  fn flatten_ok(self) -> Split<[T; N], E> { Split::Primary(self) }
}
impl<T, O, const N: usize> FlattenErr<O, [T; N]> for [T; N] {
  #[inline]
  fn flatten_err(self) -> Split<O, [T; N]> { Split::Alternate(self) }
}

impl<'a, T: ?Sized, E> FlattenOk<&'a T, E> for &'a T {
  #[inline]
  fn flatten_ok(self) -> Split<&'a T, E> { Split::Primary(self) }
}
impl<'a, T: ?Sized, O> FlattenErr<O, &'a T> for &'a T {
  #[inline]
  fn flatten_err(self) -> Split<O, &'a T> { Split::Alternate(self) }
}
impl<'a, T: ?Sized, E> FlattenOk<&'a mut T, E> for &'a mut T {
  #[inline]
  fn flatten_ok(self) -> Split<&'a mut T, E> { Split::Primary(self) }
}
impl<'a, T: ?Sized, O> FlattenErr<O, &'a mut T> for &'a mut T {
  #[inline]
  fn flatten_err(self) -> Split<O, &'a mut T> { Split::Alternate(self) }
}

macro_rules! pointer_terminal {
  ($($ptr:ident),*) => {$(
    impl<T: ?Sized, E> FlattenOk<$ptr<T>, E> for $ptr<T> {
      #[inline]
      fn flatten_ok(self) -> Split<$ptr<T>, E> { Split::Primary(self) }
    }
    impl<T: ?Sized, O> FlattenErr<O, $ptr<T>> for $ptr<T> {
      #[inline]
      fn flatten_err(self) -> Split<O, $ptr<T>> { Split::Alternate(self) }
    }
  )*};
}

pointer_terminal!(Box, Rc, Arc);


#[cfg(test)]
mod tests {
  use super::*;

  struct Lookalike(&'static str);
  impl KindMarked for Lookalike {
    fn kind_marker(&self) -> Option<&str> { Some(self.0) }
  }

  struct Unmarked;
  impl KindMarked for Unmarked {}

  #[derive(Debug, PartialEq)]
  struct Pair<T>(T, T);
  terminal!(impl<T> Pair<T>);

  #[test]
  fn markers_are_distinct_32_hex_strings() {
    for marker in [OPTIONAL_KIND_MARKER, OUTCOME_KIND_MARKER] {
      assert_eq!(marker.len(), 32);
      assert!(marker.chars().all(|c| c.is_ascii_hexdigit()));
    }
    assert_ne!(OPTIONAL_KIND_MARKER, OUTCOME_KIND_MARKER);
  }

  #[test]
  fn recognizes_matching_marker() {
    assert!(is_outcome_instance(Some(&Lookalike(OUTCOME_KIND_MARKER))));
    assert!(is_optional_instance(Some(&Lookalike(OPTIONAL_KIND_MARKER))));
  }

  #[test]
  fn rejects_other_family_marker() {
    assert!(!is_outcome_instance(Some(&Lookalike(OPTIONAL_KIND_MARKER))));
    assert!(!is_optional_instance(Some(&Lookalike(OUTCOME_KIND_MARKER))));
  }

  #[test]
  fn rejects_same_named_property_with_other_value() {
    assert!(!is_outcome_instance(Some(&Lookalike("another_hash_identifier"))));
    assert!(!is_optional_instance(Some(&Lookalike(""))));
  }

  #[test]
  fn rejects_unmarked_and_absent_values() {
    assert!(!is_outcome_instance(Some(&Unmarked)));
    assert!(!is_optional_instance(Some(&42)));
    assert!(!is_outcome_instance(Some("text")));
    assert!(!is_outcome_instance::<Unmarked>(None));
    assert!(!is_optional_instance::<dyn KindMarked>(None));
  }

  #[test]
  fn recognizes_trait_objects() {
    let boxed: Box<dyn KindMarked> = Box::new(Lookalike(OUTCOME_KIND_MARKER));
    assert!(is_outcome_instance(Some(&*boxed)));
    let value = Lookalike(OPTIONAL_KIND_MARKER);
    let object: &dyn KindMarked = &value;
    assert!(is_optional_instance(Some(object)));
  }

  #[test]
  fn std_and_generic_terminals_keep_their_side() {
    assert_eq!(FlattenOk::<(i32, &str), ()>::flatten_ok((1, "a")), Split::Primary((1, "a")));
    assert_eq!(FlattenErr::<(), [u8; 2]>::flatten_err([1, 2]), Split::Alternate([1, 2]));
    assert_eq!(FlattenOk::<Box<str>, ()>::flatten_ok(Box::<str>::from("b")), Split::Primary(Box::from("b")));
    let map = HashMap::from([(1, 2)]);
    assert_eq!(FlattenOk::<HashMap<i32, i32>, ()>::flatten_ok(map.clone()), Split::Primary(map));
    assert_eq!(FlattenErr::<(), Pair<u8>>::flatten_err(Pair(1, 2)), Split::Alternate(Pair(1, 2)));
  }
}
