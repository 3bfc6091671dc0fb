//! Optional and outcome containers with structural, cross-copy identity.
//!
//! [`Optional`] represents presence or absence of a value, [`Outcome`] success or failure of an operation. Both
//! expose a kind marker (see [`rustly_marker`]) so that containers created by another copy of this library are still
//! recognized by [`is_optional_instance`] and [`is_outcome_instance`].

pub mod error;
pub mod optional;
pub mod outcome;

#[cfg(feature = "future")]
pub mod future;

pub use error::InvalidStateError;
pub use optional::{none, some, Optional};
pub use outcome::{err, ok, Outcome};
pub use rustly_marker::{
  is_optional_instance,
  is_outcome_instance,
  nested_outcome,
  terminal,
  KindMarked,
  OutcomeLike,
  Split,
  OPTIONAL_KIND_MARKER,
  OUTCOME_KIND_MARKER,
};
