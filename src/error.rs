use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Ways of failing to gather the input sequence.
///
/// Tokenizing itself never fails.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    /// The argument iterator did not even contain
    /// the program name.
    #[error("the argument list was empty")]
    Empty,

    /// Argument `index` (counted after the program name)
    /// is not valid UTF-8.
    #[error("argument {index} is not valid utf-8: {lossy:?}")]
    InvalidString { index: usize, lossy: String },
}
