//! When encoding or decoding a record goes wrong.

use std::error;
use std::fmt::{self, Debug, Display};
use std::io;
use std::result;

/// This type represents all possible errors that can occur while reading or
/// writing records and timestamps.
pub struct Error {
    /// Boxed so that `Result<T, Error>` stays one pointer wide on the happy
    /// path.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `json_recipes::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::FormatMismatch` - a timestamp string not in the layout
    /// - `Category::TypeMismatch` - a timestamp token that is neither a string
    ///   nor `null`
    ///
    /// The two timestamp categories are also reported when the timestamp was
    /// a field of a record decoded through `serde_json`.
    /// - `Category::Syntax` - input that is not syntactically valid JSON
    /// - `Category::Data` - valid JSON that does not fit the record
    /// - `Category::Eof` - unexpected end of the input data
    /// - `Category::Io` - failure to read or write bytes on an IO stream
    pub fn classify(&self) -> Category {
        match &self.err.code {
            ErrorCode::FormatMismatch { .. } => Category::FormatMismatch,
            ErrorCode::TypeMismatch(_) => Category::TypeMismatch,
            ErrorCode::Json(err) => match err.classify() {
                serde_json::error::Category::Io => Category::Io,
                serde_json::error::Category::Syntax => Category::Syntax,
                serde_json::error::Category::Data => classify_data(err),
                serde_json::error::Category::Eof => Category::Eof,
            },
            ErrorCode::Io(_) => Category::Io,
        }
    }

    /// Returns true if this error was caused by a timestamp string that does
    /// not follow the fixed layout.
    pub fn is_format_mismatch(&self) -> bool {
        self.classify() == Category::FormatMismatch
    }

    /// Returns true if this error was caused by a timestamp token that is
    /// neither a JSON string nor `null`.
    pub fn is_type_mismatch(&self) -> bool {
        self.classify() == Category::TypeMismatch
    }

    /// Returns true if this error was caused by input that was not
    /// syntactically valid JSON.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by input data that was
    /// semantically incorrect for the record being decoded.
    pub fn is_data(&self) -> bool {
        self.classify() == Category::Data
    }

    /// Returns true if this error was caused by prematurely reaching the end of
    /// the input data.
    pub fn is_eof(&self) -> bool {
        self.classify() == Category::Eof
    }

    /// Returns true if this error was caused by a failure to read or write
    /// bytes on an IO stream.
    pub fn is_io(&self) -> bool {
        self.classify() == Category::Io
    }

    #[cold]
    pub(crate) fn format_mismatch(text: &str, reason: &'static str) -> Self {
        Error::new(ErrorCode::FormatMismatch {
            text: text.into(),
            reason,
        })
    }

    #[cold]
    pub(crate) fn type_mismatch(found: String) -> Self {
        Error::new(ErrorCode::TypeMismatch(found.into_boxed_str()))
    }

    #[cold]
    pub(crate) fn json(err: serde_json::Error) -> Self {
        Error::new(ErrorCode::Json(err))
    }

    #[cold]
    pub(crate) fn io(err: io::Error) -> Self {
        Error::new(ErrorCode::Io(err))
    }

    fn new(code: ErrorCode) -> Self {
        Error {
            err: Box::new(ErrorImpl { code }),
        }
    }
}

const FORMAT_MISMATCH_PREFIX: &str = "cannot parse ";
const TYPE_MISMATCH_PREFIX: &str = "invalid type: ";
const TYPE_MISMATCH_EXPECTED: &str = "expected a timestamp string or null";

// Timestamp errors raised inside a derived record come back from serde_json
// as plain messages. Recognize them by their fixed wording.
fn classify_data(err: &serde_json::Error) -> Category {
    let msg = err.to_string();
    if msg.starts_with(FORMAT_MISMATCH_PREFIX) && msg.contains(crate::time::LAYOUT) {
        Category::FormatMismatch
    } else if msg.starts_with(TYPE_MISMATCH_PREFIX) && msg.contains(TYPE_MISMATCH_EXPECTED) {
        Category::TypeMismatch
    } else {
        Category::Data
    }
}

/// Categorizes the cause of a `json_recipes::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// A timestamp string was present but did not follow the layout.
    FormatMismatch,

    /// A timestamp token was neither a JSON string nor `null`.
    TypeMismatch,

    /// The error was caused by input that was not syntactically valid JSON.
    Syntax,

    /// The error was caused by input data that was semantically incorrect.
    ///
    /// For example, a `Person` whose `age` is a string.
    Data,

    /// The error was caused by prematurely reaching the end of the input data.
    Eof,

    /// The error was caused by a failure to read or write bytes on an IO
    /// stream.
    Io,
}

impl From<Error> for io::Error {
    /// Convert a `json_recipes::Error` into an `io::Error`.
    ///
    /// IO errors are unwrapped, EOF errors become `UnexpectedEof` and
    /// everything else becomes `InvalidData`.
    fn from(j: Error) -> Self {
        match j.err.code {
            ErrorCode::Io(err) => err,
            ErrorCode::Json(err) => err.into(),
            _ => io::Error::new(io::ErrorKind::InvalidData, j),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::json(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::io(err)
    }
}

struct ErrorImpl {
    code: ErrorCode,
}

/// This type describes all possible errors that can occur when reading or
/// writing records.
pub enum ErrorCode {
    /// Timestamp text that does not match `02 Jan 06 15:04 -0700`.
    FormatMismatch {
        /// The offending text, without the surrounding quotes.
        text: Box<str>,
        /// Which part of the layout it broke.
        reason: &'static str,
    },

    /// Timestamp token of the wrong JSON type. Holds a description of what
    /// was found instead, for example ``number `123` ``.
    TypeMismatch(Box<str>),

    /// Error reported by `serde_json` while parsing or producing JSON.
    Json(serde_json::Error),

    /// Some IO error occurred outside of `serde_json`.
    Io(io::Error),
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::FormatMismatch { text, reason } => f
                .debug_struct("FormatMismatch")
                .field("text", text)
                .field("reason", reason)
                .finish(),
            ErrorCode::TypeMismatch(found) => f.debug_tuple("TypeMismatch").field(found).finish(),
            ErrorCode::Json(err) => f.debug_tuple("Json").field(err).finish(),
            ErrorCode::Io(_) => f.debug_tuple("Io").finish(),
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::FormatMismatch { text, reason } => write!(
                f,
                "{}{:?} as {:?}: {}",
                FORMAT_MISMATCH_PREFIX,
                text,
                crate::time::LAYOUT,
                reason
            ),
            ErrorCode::TypeMismatch(found) => write!(
                f,
                "{}{}, {}",
                TYPE_MISMATCH_PREFIX, found, TYPE_MISMATCH_EXPECTED
            ),
            ErrorCode::Json(err) => Display::fmt(err, f),
            ErrorCode::Io(err) => Display::fmt(err, f),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.err.code {
            ErrorCode::Json(err) => Some(err),
            ErrorCode::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.err.code, f)
    }
}

// Humans mostly see this through unwrap(), so keep it to one line.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, category: {:?})",
            self.err.code.to_string(),
            self.classify()
        )
    }
}
