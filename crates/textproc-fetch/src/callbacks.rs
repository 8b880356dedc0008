//! Optional success/failure handlers over a [`FetchResult`].

use serde_json::Value;

use crate::outcome::{FetchResult, FetchSuccess};

type SuccessHandler<'a> = Box<dyn FnOnce(&FetchSuccess) + Send + 'a>;
type FailureHandler<'a> = Box<dyn FnOnce(Option<Value>, u16) + Send + 'a>;

/// Handlers invoked when a result is dispatched.
///
/// A handler that was not set is skipped; the result is always handed back
/// so the caller can still inspect it.
///
/// ```
/// use textproc_fetch::{Callbacks, FetchFailure};
///
/// let mut seen = None;
/// let result = Callbacks::new()
///     .on_failure(|payload, status| seen = Some((payload, status)))
///     .dispatch(Err(FetchFailure::Network { message: "refused".into() }));
///
/// assert!(result.is_err());
/// assert_eq!(seen, Some((None, 0)));
/// ```
#[derive(Default)]
pub struct Callbacks<'a> {
    on_success: Option<SuccessHandler<'a>>,
    on_failure: Option<FailureHandler<'a>>,
}

impl<'a> Callbacks<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the success value.
    #[must_use]
    pub fn on_success(mut self, handler: impl FnOnce(&FetchSuccess) + Send + 'a) -> Self {
        self.on_success = Some(Box::new(handler));
        self
    }

    /// Called with `(payload, status)`; status is `0` when there is none.
    #[must_use]
    pub fn on_failure(mut self, handler: impl FnOnce(Option<Value>, u16) + Send + 'a) -> Self {
        self.on_failure = Some(Box::new(handler));
        self
    }

    /// Invoke the matching handler, then return `result` unchanged.
    pub fn dispatch(self, result: FetchResult) -> FetchResult {
        match &result {
            Ok(success) => {
                if let Some(handler) = self.on_success {
                    handler(success);
                }
            }
            Err(failure) => {
                if let Some(handler) = self.on_failure {
                    handler(failure.payload(), failure.status_code());
                }
            }
        }
        result
    }
}
