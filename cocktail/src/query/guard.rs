use serde::Serialize;
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::errors::{ErrorKind, RecipeError, RecipeResult};

/// Serialized form of a failed operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    is_error: bool,
    kind: ErrorKind,
    status: u16,
    message: String,
}

impl ErrorPayload {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&RecipeError> for ErrorPayload {
    fn from(err: &RecipeError) -> Self {
        ErrorPayload {
            is_error: true,
            kind: *err.kind(),
            status: err.status(),
            message: err.message().to_string(),
        }
    }
}

impl From<RecipeError> for ErrorPayload {
    fn from(err: RecipeError) -> Self {
        ErrorPayload::from(&err)
    }
}

impl From<ErrorPayload> for RecipeError {
    fn from(payload: ErrorPayload) -> Self {
        RecipeError::new(&payload.message, payload.kind).with_status(payload.status)
    }
}

/// Result of a guarded operation: data or an [ErrorPayload], never both.
///
/// Serializes as the bare data on success and as
/// `{"isError":true,"kind":..,"status":..,"message":..}` on failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExecutionResult<T> {
    Data(T),
    Error(ErrorPayload),
}

impl<T> ExecutionResult<T> {
    pub fn is_error(&self) -> bool {
        matches!(self, ExecutionResult::Error(_))
    }

    /// `200` for data, otherwise the error's status.
    pub fn status(&self) -> u16 {
        match self {
            ExecutionResult::Data(_) => 200,
            ExecutionResult::Error(payload) => payload.status,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ExecutionResult::Data(data) => Some(data),
            ExecutionResult::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorPayload> {
        match self {
            ExecutionResult::Data(_) => None,
            ExecutionResult::Error(payload) => Some(payload),
        }
    }

    pub fn into_result(self) -> Result<T, ErrorPayload> {
        match self {
            ExecutionResult::Data(data) => Ok(data),
            ExecutionResult::Error(payload) => Err(payload),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ExecutionResult<U> {
        match self {
            ExecutionResult::Data(data) => ExecutionResult::Data(f(data)),
            ExecutionResult::Error(payload) => ExecutionResult::Error(payload),
        }
    }
}

impl<T> From<RecipeResult<T>> for ExecutionResult<T> {
    fn from(result: RecipeResult<T>) -> Self {
        match result {
            Ok(data) => ExecutionResult::Data(data),
            Err(err) => ExecutionResult::Error(ErrorPayload::from(&err)),
        }
    }
}

/// Runs `operation`, converting a returned error or a panic into an
/// [ExecutionResult::Error]. This is the only place failures are caught.
pub fn guard<T, F>(operation: F) -> ExecutionResult<T>
where
    F: FnOnce() -> RecipeResult<T>,
{
    match catch_unwind(AssertUnwindSafe(operation)) {
        Ok(Ok(data)) => ExecutionResult::Data(data),
        Ok(Err(err)) => {
            log::debug!("Operation failed: {}", err);
            ExecutionResult::Error(ErrorPayload::from(&err))
        }
        Err(panic) => {
            let message = panic_message(panic.as_ref());
            log::warn!("Operation panicked: {}", message);
            ExecutionResult::Error(ErrorPayload::from(RecipeError::new(
                &message,
                ErrorKind::Internal,
            )))
        }
    }
}

/// Wraps `operation` so that calling the result never fails: its output is
/// always an [ExecutionResult].
///
/// ```rust,ignore
/// let count = guarded(|spec: QuerySpec| store.count(&spec));
/// let result = count(QuerySpec::new());
/// ```
pub fn guarded<A, T, F>(operation: F) -> impl Fn(A) -> ExecutionResult<T>
where
    F: Fn(A) -> RecipeResult<T>,
{
    move |input| guard(|| operation(input))
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Operation panicked".to_string()
    }
}
