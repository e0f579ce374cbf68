use backtrace::Backtrace;
use parking_lot::Mutex;
use serde::{de, ser, Serialize};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;
use std::sync::Arc;

/// Error kinds for catalog operations.
///
/// Every kind carries a default HTTP status. A [RecipeError] may override it,
/// which is how a missing recipe during duplication surfaces as `404` while
/// other lookups that find nothing are simply empty results.
///
/// # Examples
///
/// ```rust,ignore
/// use cocktail::errors::{ErrorKind, RecipeError, RecipeResult};
///
/// fn example() -> RecipeResult<()> {
///     Err(RecipeError::new("Unknown field 'color'", ErrorKind::InvalidArgument))
/// }
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum ErrorKind {
    /// Malformed caller input: bad ids, unknown fields, wrong value types
    InvalidArgument,
    /// The addressed recipe does not exist
    NotFound,
    /// Failure reported by the underlying document store
    StoreError,
    /// Failure while converting between documents, records and JSON
    EncodingError,
    /// Anything else, including panics caught at the operation boundary
    Internal,
}

impl ErrorKind {
    /// The status reported for this kind unless an error overrides it.
    pub fn default_status(&self) -> u16 {
        match self {
            ErrorKind::InvalidArgument => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::StoreError | ErrorKind::EncodingError | ErrorKind::Internal => 500,
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidArgument => write!(f, "Invalid argument"),
            ErrorKind::NotFound => write!(f, "Not found"),
            ErrorKind::StoreError => write!(f, "Store error"),
            ErrorKind::EncodingError => write!(f, "Encoding error"),
            ErrorKind::Internal => write!(f, "Internal error"),
        }
    }
}

/// Error type of the recipe catalog.
///
/// `RecipeError` carries a message, a kind, an optional status override and an
/// optional cause. A backtrace is captured at construction and resolved lazily
/// when the error is debug-printed.
///
/// # Examples
///
/// ```rust,ignore
/// use cocktail::errors::{ErrorKind, RecipeError};
///
/// let err = RecipeError::new("Recipe not found", ErrorKind::NotFound).with_status(404);
/// assert_eq!(err.status(), 404);
///
/// let cause = RecipeError::new("disk unavailable", ErrorKind::StoreError);
/// let err = RecipeError::new_with_cause("Failed to load seed", ErrorKind::StoreError, cause);
/// ```
#[derive(Clone)]
pub struct RecipeError {
    message: String,
    error_kind: ErrorKind,
    status: Option<u16>,
    cause: Option<Box<RecipeError>>,
    backtrace: Arc<Mutex<Backtrace>>,
}

impl RecipeError {
    /// Creates a new `RecipeError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        RecipeError {
            message: message.to_string(),
            error_kind,
            status: None,
            cause: None,
            backtrace: Arc::new(Mutex::new(Backtrace::new_unresolved())),
        }
    }

    /// Creates a new `RecipeError` wrapping the error that caused it.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: RecipeError) -> Self {
        RecipeError {
            message: message.to_string(),
            error_kind,
            status: None,
            cause: Some(Box::new(cause)),
            backtrace: Arc::new(Mutex::new(Backtrace::new_unresolved())),
        }
    }

    /// Overrides the status derived from the error kind.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    /// The explicit status override if one was set, otherwise the kind's default.
    pub fn status(&self) -> u16 {
        self.status
            .unwrap_or_else(|| self.error_kind.default_status())
    }

    pub fn cause(&self) -> Option<&RecipeError> {
        self.cause.as_deref()
    }
}

impl Display for RecipeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for RecipeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => {
                let mut backtrace = self.backtrace.lock();
                backtrace.resolve();
                write!(f, "{}\n{:?}", self.message, *backtrace)
            }
        }
    }
}

impl Error for RecipeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// Shorthand for `Result<T, RecipeError>`, returned by every fallible
/// catalog operation.
pub type RecipeResult<T> = Result<T, RecipeError>;

impl de::Error for RecipeError {
    fn custom<T: Display>(msg: T) -> Self {
        RecipeError::new(&msg.to_string(), ErrorKind::EncodingError)
    }
}

impl ser::Error for RecipeError {
    fn custom<T: Display>(msg: T) -> Self {
        RecipeError::new(&msg.to_string(), ErrorKind::EncodingError)
    }
}

impl From<std::io::Error> for RecipeError {
    fn from(err: std::io::Error) -> Self {
        RecipeError::new(&format!("IO error: {}", err), ErrorKind::StoreError)
    }
}

impl From<serde_json::Error> for RecipeError {
    fn from(err: serde_json::Error) -> Self {
        let error_kind = match err.classify() {
            serde_json::error::Category::Io => ErrorKind::StoreError,
            _ => ErrorKind::EncodingError,
        };
        RecipeError::new(&format!("JSON error: {}", err), error_kind)
    }
}

impl From<regex::Error> for RecipeError {
    fn from(err: regex::Error) -> Self {
        RecipeError::new(
            &format!("Pattern compilation error: {}", err),
            ErrorKind::Internal,
        )
    }
}

impl From<std::num::ParseIntError> for RecipeError {
    fn from(err: std::num::ParseIntError) -> Self {
        RecipeError::new(
            &format!("Integer parsing error: {}", err),
            ErrorKind::InvalidArgument,
        )
    }
}

impl From<std::num::ParseFloatError> for RecipeError {
    fn from(err: std::num::ParseFloatError) -> Self {
        RecipeError::new(
            &format!("Float parsing error: {}", err),
            ErrorKind::InvalidArgument,
        )
    }
}

impl From<String> for RecipeError {
    fn from(msg: String) -> Self {
        RecipeError::new(&msg, ErrorKind::Internal)
    }
}

impl From<&str> for RecipeError {
    fn from(msg: &str) -> Self {
        RecipeError::new(msg, ErrorKind::Internal)
    }
}
