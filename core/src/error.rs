use thiserror::Error;

/// An accessor was called on a container in the wrong variant.
///
/// This signals a programming error (querying the wrong variant). Expected absence or failure is modelled by the
/// `None` and `Err` variants themselves.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
pub enum InvalidStateError {
  #[error("Option should be of type Some")]
  ExpectedSome,
  #[error("Option should be of type None")]
  ExpectedNone,
  #[error("Result should be of type Ok")]
  ExpectedOk,
  #[error("Result should be of type Err")]
  ExpectedErr,
}

impl InvalidStateError {
  /// Panics with this error's message.
  #[track_caller]
  #[cold]
  pub(crate) fn raise(self) -> ! {
    tracing::debug!(error = %self, "container accessed in the wrong variant");
    panic!("{}", self)
  }
}
