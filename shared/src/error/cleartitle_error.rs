use std::error::Error;
use std::fmt::{Display, Formatter, Result};

#[macro_export]
macro_rules! info_err {
    // This matches any arguments (format string + variables) and forwards them
    // to format!, then wraps them in the error constructor.
    ($($arg:tt)*) => {
        $crate::error::CleartitleError::new($crate::error::CleartitleErrorKind::Info, format!($($arg)*))
    };
}

pub use info_err;

#[macro_export]
macro_rules! config_err {
    ($($arg:tt)*) => {
        $crate::error::CleartitleError::new($crate::error::CleartitleErrorKind::Config, format!($($arg)*))
    };
}

pub use config_err;

#[macro_export]
macro_rules! config_err_res {
    ($($arg:tt)*) => {
        Err($crate::error::CleartitleError::new($crate::error::CleartitleErrorKind::Config, format!($($arg)*)))
    };
}

pub use config_err_res;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CleartitleErrorKind {
    // recoverable, logged and skipped
    Info,
    Config, // configuration can't be used
}

#[derive(Debug)]
pub struct CleartitleError {
    pub kind: CleartitleErrorKind,
    pub message: String,
}

impl CleartitleError {
    pub const fn new(kind: CleartitleErrorKind, message: String) -> Self {
        Self { kind, message }
    }
}

impl Display for CleartitleError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "Cleartitle error: {}", self.message)
    }
}

impl Error for CleartitleError {}

pub fn to_io_error<E>(err: E) -> std::io::Error
where
    E: std::error::Error,
{ std::io::Error::other(err.to_string()) }
